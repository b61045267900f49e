use leptos::{either::Either, prelude::*};

use super::avatar::InitialsBadge;
use super::icons::{Icon, ICON_ARROW_RIGHT, ICON_MOON, ICON_SUN};
use crate::nav::{scroll_to_section, BrowserViewport, Section};
use crate::portfolio::Profile;
use crate::theme::{DisplayMode, Palette};

#[component]
pub fn NavBar(
    profile: Profile,
    mode: RwSignal<DisplayMode>,
    palette: Memo<Palette>,
) -> impl IntoView {
    let mailto = profile.contact.mailto();

    view! {
        <header
            class="fixed top-0 w-full z-50 backdrop-blur-md"
            style=move || {
                let p = palette.get();
                format!("background: {}; border-bottom: 1px solid {};", p.nav_bg, p.nav_border)
            }
        >
            <div class="max-w-[1400px] mx-auto px-6 md:px-16 py-4 flex justify-between items-center">
                <div class="flex items-center gap-4">
                    <InitialsBadge initials=profile.initials palette />
                    <span class="text-xl font-bold">{profile.name}</span>
                </div>
                <nav class="hidden md:flex gap-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    type="button"
                                    class="font-medium hover:opacity-75 transition-opacity"
                                    on:click=move |_| {
                                        scroll_to_section(&BrowserViewport, section.id());
                                    }
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-4">
                    <ThemeToggle mode />
                    <a
                        href=mailto
                        class="hidden sm:inline-flex items-center gap-2 rounded-full px-6 py-2 font-medium text-white transition-colors"
                        style=move || format!("background: {};", palette.get().primary)
                    >
                        "Let's Connect"
                        <Icon path=ICON_ARROW_RIGHT view_box="0 0 256 256" size="16" />
                    </a>
                </div>
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle(mode: RwSignal<DisplayMode>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="p-2 rounded-full hover:bg-white/10 transition-colors"
            title=move || mode.get().toggle_label()
            aria-label=move || mode.get().toggle_label()
            on:click=move |_| mode.update(DisplayMode::toggle)
        >
            {move || {
                if mode.get().is_dark() {
                    Either::Left(view! { <Icon path=ICON_SUN view_box="0 0 256 256" name="sun" /> })
                } else {
                    Either::Right(view! { <Icon path=ICON_MOON view_box="0 0 256 256" name="moon" /> })
                }
            }}
        </button>
    }
}
