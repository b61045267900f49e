use leptos::prelude::*;

use super::avatar::Avatar;
use super::icons::ServiceGlyph;
use super::resume::{Chip, SectionHeading};
use crate::nav::Section;
use crate::portfolio::{Profile, Project, ServiceOffering};
use crate::theme::Palette;

#[component]
pub fn Hero(profile: Profile, palette: Memo<Palette>) -> impl IntoView {
    let projects_href = format!("#{}", Section::Projects.id());

    view! {
        <section class="pt-32 md:pt-40 pb-24 px-6 md:px-16 text-center md:text-left">
            <div class="max-w-[1400px] mx-auto grid grid-cols-1 md:grid-cols-12 gap-12 items-center">
                <div class="md:col-span-7">
                    <h1 class="text-5xl md:text-8xl font-black leading-tight">{profile.name}</h1>
                    <h2
                        class="text-2xl md:text-4xl font-semibold my-6"
                        style=move || format!("color: {};", palette.get().primary)
                    >
                        {profile.headline}
                    </h2>
                    <p class="mb-10 max-w-[700px] leading-loose opacity-90">{profile.tagline}</p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center md:justify-start">
                        <a
                            href=profile.contact.mailto()
                            class="rounded-full px-8 py-3 text-lg font-medium text-white text-center"
                            style=move || format!("background: {};", palette.get().primary)
                        >
                            "Get in Touch"
                        </a>
                        <a
                            href=projects_href
                            class="rounded-full px-8 py-3 text-lg font-medium text-center"
                            style=move || {
                                let p = palette.get();
                                format!("border: 1px solid {0}; color: {0};", p.primary)
                            }
                        >
                            "Explore Projects"
                        </a>
                    </div>
                </div>
                <div class="md:col-span-5 text-center">
                    <Avatar src=profile.photo alt=profile.name palette />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Services(services: &'static [ServiceOffering], palette: Memo<Palette>) -> impl IntoView {
    view! {
        <section
            class="py-24 px-6 md:px-16"
            style=move || format!("background: {};", palette.get().services_bg)
        >
            <SectionHeading text="Services I Offer" palette />
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-8 max-w-[1100px] mx-auto">
                {services
                    .iter()
                    .map(|service| {
                        view! {
                            <div
                                data-card="service"
                                class="h-full text-center p-8 rounded-xl shadow-lg transition-transform duration-300 hover:-translate-y-2 hover:shadow-2xl"
                                style=move || format!("background: {};", palette.get().card)
                            >
                                <div
                                    class="flex justify-center mb-4"
                                    style=move || format!("color: {};", palette.get().primary)
                                >
                                    <ServiceGlyph icon=service.icon />
                                </div>
                                <h3 class="text-lg font-semibold mb-2">{service.title}</h3>
                                <p
                                    class="text-sm"
                                    style=move || format!("color: {};", palette.get().muted)
                                >
                                    {service.description}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Projects(projects: &'static [Project], palette: Memo<Palette>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-24 px-6 md:px-16">
            <SectionHeading text="Featured Projects" palette />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-[1200px] mx-auto">
                {projects
                    .iter()
                    .map(|project| {
                        view! {
                            <article
                                data-card="project"
                                class="h-full rounded-xl overflow-hidden p-8 shadow-lg transition-all duration-300 hover:-translate-y-1.5 hover:shadow-2xl"
                                style=move || format!("background: {};", palette.get().card)
                            >
                                <h3
                                    class="text-2xl font-bold mb-4"
                                    style=move || format!("color: {};", palette.get().primary)
                                >
                                    {project.title}
                                </h3>
                                <p class="mb-6 leading-relaxed">{project.description}</p>
                                <div class="flex flex-wrap gap-2">
                                    {project
                                        .tech
                                        .iter()
                                        .map(|tech| view! { <Chip label=*tech kind="tech" palette /> })
                                        .collect_view()}
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
