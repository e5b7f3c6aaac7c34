//! Landing page with a link into the deck

use leptos::prelude::*;

use crate::router::routes;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main style="min-height: 100vh; display: grid; place-items: center; padding: 2rem;">
            <div style="max-width: 36rem; text-align: center; display: grid; gap: 1rem;">
                <h1 style="font-size: 2rem; font-weight: 600;">"Motion for the Web"</h1>
                <p style="opacity: 0.8;">"A tiny slide deck with live, interactive demos."</p>
                <a
                    href=routes::SLIDES
                    style="display: inline-block; border-radius: 6px; background: #6366f1; \
                           color: white; padding: 0.5rem 1rem; text-decoration: none;"
                >
                    "Open Slides"
                </a>
            </div>
        </main>
    }
}
