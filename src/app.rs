mod avatar;
mod background;
mod card;
mod contact;
mod header;
mod hero;
mod icons;
mod portfolio;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{person_schema, PROFILE};
use portfolio::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let schema = match person_schema() {
        Ok(schema) => Some(schema),
        Err(e) => {
            log::error!("Couldn't serialize person schema: {e}");
            None
        }
    };
    let build_time = env!("BUILD_TIME");
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="build-time" content=build_time />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                {schema
                    .map(|schema| {
                        view! { <script type="application/ld+json" inner_html=schema></script> }
                    })}
                <MetaTags />
            </head>
            <body class="bg-gray-900">
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
        <Title text=format!("{} - {}", PROFILE.name, PROFILE.headline) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_to_string<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| f().into_view().to_html())
}
