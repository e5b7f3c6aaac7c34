//! Closing slide

use leptos::prelude::*;

use crate::components::PresenterNotes;

const NOTES: &str = "Closing:\n\
    - Thank the room, point at the deck itself as the last demo.\n\
    - Offer the repo link out loud; questions after.";

/// Closing slide
#[component]
pub fn ThanksSlide() -> impl IntoView {
    view! {
        <PresenterNotes notes=NOTES />
        <div style="max-width: 960px; text-align: center; padding-top: 25vh;">
            <h1 style="font-size: 4rem; margin-bottom: 1rem;">"Thanks!"</h1>
            <p style="font-size: 1.5rem; opacity: 0.9;">
                "Hope you're excited to start animating."
            </p>
        </div>
    }
}
