//! Opening slide

use leptos::prelude::*;

use crate::components::PresenterNotes;

const NOTES: &str = "Opening hook:\n\
    - Start with energy: motion makes the web feel alive.\n\
    - Set expectations: deck basics first, demos after.\n\
    - Mention keyboard navigation (arrows or A/D).";

/// Title slide with the deck's one-line pitch
#[component]
pub fn TitleSlide() -> impl IntoView {
    view! {
        <PresenterNotes notes=NOTES />
        <div style="max-width: 960px; text-align: center; padding-top: 20vh;">
            <h1 style="font-size: 3.5rem; margin-bottom: 1rem;">"Motion for the Web"</h1>
            <p style="font-size: 1.5rem; opacity: 0.8;">
                "A tiny slide deck with live, interactive demos."
            </p>
        </div>
    }
}
