mod contact;
mod header;
mod homepage;
mod resume;
mod reveal;
mod theme;
mod toast;

use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

use crate::{notify::Severity, profile::profile};

use header::{provide_navigator, Header};
use homepage::HomePage;
use theme::provide_theme;
use toast::{provide_notifier, Toast};

/// The loading overlay is lifted this long after the app mounts.
const LOADING_SCREEN_DURATION: Duration = Duration::from_millis(1500);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body data-theme="dark">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let notifier = provide_notifier();
    provide_navigator();
    provide_theme();

    let _ = use_event_listener(use_window(), ev::error, move |_| {
        log::error!("uncaught error on page");
        notifier.notify("An error occurred. Please refresh the page.", Severity::Error);
    });

    let name = profile().name.clone();
    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=profile().headline.clone() />

        <Router>
            <LoadingScreen />
            <Header />
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <Toast />
        </Router>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    let (hidden, set_hidden) = signal(false);
    Effect::new(move |_| {
        set_timeout(move || set_hidden.set(true), LOADING_SCREEN_DURATION);
    });
    view! {
        <div
            id="loadingScreen"
            class=move || if hidden.get() { "loading-screen hidden" } else { "loading-screen" }
        >
            <div class="loader"></div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let p = profile();
    let year = chrono::Utc::now().format("%Y").to_string();
    view! {
        <footer class="footer">
            <p>{format!("© {year} {}. All rights reserved.", p.name)}</p>
            <p class="footer-build">"Last updated " {build_date()}</p>
        </footer>
    }
}

fn build_date() -> String {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_default()
}

/// Wall-clock milliseconds, used to expire navigation pins.
fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
