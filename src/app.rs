mod controls;
mod landing;
mod stage;

use std::fmt::Display;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::carousel::CarouselSettings;
use landing::Landing;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-neutral-50 text-neutral-900 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(CarouselSettings::default());

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />

        <Router>
            <div class="overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Landing />
                </Routes>
            </div>
        </Router>
    }
}

fn px(value: impl Display) -> String {
    format!("{value}px")
}
