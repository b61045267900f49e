mod avatar;
mod contact;
mod header;
mod homepage;
mod icons;
mod resume;
mod showcase;

pub use homepage::{HomePage, Page};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::CONTENT;
use crate::seo::person_json_ld;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person_json_ld(&CONTENT)></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", CONTENT.profile.name) />
        <Meta name="description" content=CONTENT.profile.tagline />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
