use leptos::prelude::*;

use crate::theme::Palette;

#[component]
pub fn InitialsBadge(initials: &'static str, palette: Memo<Palette>) -> impl IntoView {
    view! {
        <span
            class="flex items-center justify-center w-10 h-10 rounded-full font-bold text-white"
            style=move || format!("background: {};", palette.get().primary)
        >
            {initials}
        </span>
    }
}

/// Round profile photo. A missing image falls back to the browser's broken-image rendering.
#[component]
pub fn Avatar(src: &'static str, alt: &'static str, palette: Memo<Palette>) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            class="w-[280px] h-[280px] md:w-[360px] md:h-[360px] mx-auto rounded-full object-cover shadow-2xl"
            style=move || format!("border: 4px solid {};", palette.get().primary)
        />
    }
}
