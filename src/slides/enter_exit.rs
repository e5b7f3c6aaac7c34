//! Enter/exit demo slide
//!
//! Toggles a panel in and out of the tree to show that unmounting
//! content can still animate: the same start/settle technique the deck's
//! own transition presenter uses, at panel scale.

use leptos::prelude::*;

use crate::components::PresenterNotes;
use crate::transition::{Easing, VisualState};

const DEMO_FADE_MS: u32 = 250;

const NOTES: &str = "Enter/exit demo:\n\
    - Toggle a few times; point out the panel never pops.\n\
    - Key insight: the element must outlive its state to animate out.\n\
    - Same technique the deck itself uses between slides.";

/// Mount/unmount demo with a visibility toggle
#[component]
pub fn EnterExitSlide() -> impl IntoView {
    let shown = RwSignal::new(true);

    let panel_style = move || {
        let state = if shown.get() {
            VisualState::rest()
        } else {
            VisualState::offset(-20.0)
        };
        format!(
            "{} transition: transform {}ms {}, opacity {}ms {}; \
             padding: 2rem; border-radius: 12px; background: rgba(99, 102, 241, 0.2); \
             margin-top: 1.5rem;",
            state.css(),
            DEMO_FADE_MS,
            Easing::EaseOut.css(),
            DEMO_FADE_MS,
            Easing::EaseOut.css()
        )
    };

    view! {
        <PresenterNotes notes=NOTES />
        <div style="max-width: 960px; width: 100%; padding: 4rem 2rem 0;">
            <h2 style="font-size: 2.5rem; margin-bottom: 1rem;">"Enter / Exit"</h2>
            <p style="opacity: 0.8;">
                "Exit animations need the element to outlive its state: \
                 fade first, remove after."
            </p>
            <button
                on:click=move |_| shown.update(|s| *s = !*s)
                style="padding: 8px 16px; border-radius: 8px; border: none; \
                       background: #6366f1; color: white; cursor: pointer;"
            >
                {move || if shown.get() { "Hide panel" } else { "Show panel" }}
            </button>
            <div style=panel_style>
                "I slide and fade instead of popping."
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = EnterExitSlide;
    }

    #[test]
    fn test_notes_are_populated() {
        assert!(!NOTES.is_empty());
    }
}
