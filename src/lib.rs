#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod nav;
pub mod portfolio;
pub mod seo;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
