use leptos::prelude::*;

use crate::nav::Section;
use crate::portfolio::{Certification, Education, Employer, ExperienceEntry, SkillCategory};
use crate::theme::Palette;

#[component]
pub fn SectionHeading(text: &'static str, palette: Memo<Palette>) -> impl IntoView {
    view! {
        <h2
            class="text-4xl md:text-5xl font-bold text-center mb-12"
            style=move || format!("color: {};", palette.get().primary)
        >
            {text}
        </h2>
    }
}

/// Outlined label. `kind` ends up in `data-chip` ("skill" or "tech").
#[component]
pub fn Chip(label: &'static str, kind: &'static str, palette: Memo<Palette>) -> impl IntoView {
    view! {
        <span
            data-chip=kind
            class="inline-block rounded-full px-3 py-1 text-sm"
            style=move || {
                let p = palette.get();
                format!("border: 1px solid {0}; color: {0};", p.primary)
            }
        >
            {label}
        </span>
    }
}

#[component]
pub fn About(paragraphs: &'static [&'static str], palette: Memo<Palette>) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24 px-6 md:px-16 max-w-[1100px] mx-auto">
            <SectionHeading text="About Me" palette />
            {paragraphs
                .iter()
                .map(|p| view! { <p class="text-lg leading-loose mb-6">{*p}</p> })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn Skills(categories: &'static [SkillCategory], palette: Memo<Palette>) -> impl IntoView {
    view! {
        <section
            id=Section::Skills.id()
            class="py-24 px-6 md:px-16"
            style=move || format!("background: {};", palette.get().skills_bg)
        >
            <SectionHeading text="Technical Skills" palette />
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8 max-w-[1200px] mx-auto">
                {categories
                    .iter()
                    .map(|category| {
                        view! {
                            <div
                                data-card="skills"
                                data-category=category.name
                                class="h-full p-6 rounded-xl shadow-md"
                                style=move || format!("background: {};", palette.get().card)
                            >
                                <h3
                                    class="text-lg font-semibold mb-4"
                                    style=move || format!("color: {};", palette.get().primary)
                                >
                                    {category.name}
                                </h3>
                                <div class="flex flex-wrap gap-2">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <Chip label=*skill kind="skill" palette /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Experience(
    employer: Employer,
    entries: &'static [ExperienceEntry],
    palette: Memo<Palette>,
) -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-24 px-6 md:px-16 max-w-[1000px] mx-auto">
            <SectionHeading text="Work Experience" palette />
            <div
                class="p-8 rounded-xl shadow-xl"
                style=move || format!("background: {};", palette.get().card)
            >
                <h3 class="text-2xl font-bold">{employer.name}</h3>
                <p class="mb-6" style=move || format!("color: {};", palette.get().muted)>
                    {format!("{} • {}", employer.role, employer.period)}
                </p>
                <ul class="space-y-4">
                    {entries
                        .iter()
                        .map(|entry| {
                            view! {
                                <li data-card="experience">
                                    <p class="font-semibold">{entry.title}</p>
                                    <p
                                        class="text-sm"
                                        style=move || format!("color: {};", palette.get().muted)
                                    >
                                        {entry.description}
                                    </p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
pub fn Credentials(
    education: Education,
    certifications: &'static [Certification],
    palette: Memo<Palette>,
) -> impl IntoView {
    let heading_style = move || format!("color: {};", palette.get().primary);

    view! {
        <section class="py-20 px-6 md:px-16 max-w-[900px] mx-auto text-center">
            <hr class="my-12 opacity-20" />
            <h3 class="text-2xl mb-4" style=heading_style>"Education"</h3>
            <p class="mb-1">{education.degree}</p>
            <p style=move || format!("color: {};", palette.get().muted)>
                {format!("{} • {}", education.institution, education.period)}
            </p>

            <hr class="my-12 opacity-20" />
            <h3 class="text-2xl mb-4" style=heading_style>"Certifications"</h3>
            <ul class="flex flex-col items-center gap-2">
                {certifications
                    .iter()
                    .map(|cert| view! { <li>{format!("{} – {}", cert.name, cert.issuer)}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
