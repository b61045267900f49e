use leptos::prelude::*;

use crate::nav::Section;
use crate::portfolio::Contact;
use crate::theme::Palette;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn ContactStrip(
    contact: Contact,
    location: &'static str,
    palette: Memo<Palette>,
) -> impl IntoView {
    view! {
        <div
            class="py-8 text-center"
            style=move || format!("background: {};", palette.get().strip_bg)
        >
            <div class="flex flex-col sm:flex-row gap-8 justify-center items-center">
                <a href=contact.tel()>{contact.phone}</a>
                <a href=contact.mailto()>{contact.email}</a>
                <a
                    href=contact.linkedin
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 font-medium"
                    style=move || format!("color: {};", palette.get().primary)
                >
                    <i class="devicon-linkedin-plain"></i>
                    "LinkedIn"
                </a>
                <span>{location}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection(contact: Contact, palette: Memo<Palette>) -> impl IntoView {
    let button = "inline-flex items-center justify-center gap-2 rounded-md border border-white px-8 py-3 text-lg text-white hover:bg-white/10 transition-colors";

    view! {
        <section
            id=Section::Contact.id()
            class="py-24 px-6 text-center text-white"
            style=move || {
                let p = palette.get();
                format!("background: linear-gradient(135deg, {} 0%, {} 100%);", p.primary, p.primary_dark)
            }
        >
            <h2 class="text-4xl font-bold mb-4">"Get in Touch"</h2>
            <p class="mb-10 max-w-[600px] mx-auto opacity-90">
                "Open to freelance, contract, collaboration, or full-time opportunities. Let's build something impactful!"
            </p>
            <div class="flex flex-col sm:flex-row gap-8 justify-center">
                <a href=contact.mailto() class=button>
                    "📧 Email Me"
                </a>
                <a href=contact.tel() class=button>
                    {format!("📞 {}", contact.phone)}
                </a>
                <a href=contact.linkedin target="_blank" rel="noopener noreferrer" class=button>
                    <i class="devicon-linkedin-plain"></i>
                    "LinkedIn"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(name: &'static str, palette: Memo<Palette>) -> impl IntoView {
    view! {
        <footer
            class="py-8 text-center text-sm"
            style=move || {
                let p = palette.get();
                format!("background: {}; color: {};", p.footer_bg, p.muted)
            }
        >
            {format!("© {BUILD_YEAR} {name} • Built with Rust and Leptos")}
        </footer>
    }
}
