//! The slide registry
//!
//! An ordered, fixed set of slide entries built once per session. The
//! deck controller and transition presenter treat every entry as opaque
//! renderable content; identity lives in the position, stable string
//! keys exist for humans and tests.

use leptos::prelude::*;

pub mod enter_exit;
pub mod gestures;
pub mod thanks;
pub mod title;
pub mod why_motion;

pub use enter_exit::EnterExitSlide;
pub use gestures::GesturesSlide;
pub use thanks::ThanksSlide;
pub use title::TitleSlide;
pub use why_motion::WhyMotionSlide;

/// One entry in the deck: a stable key, a title, and an opaque renderer
#[derive(Clone, Copy)]
pub struct SlideEntry {
    /// Stable identifier, unique within the deck
    pub key: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// Mounts a fresh instance of the slide's content
    pub render: fn() -> AnyView,
}

/// The deck, in presentation order
///
/// Order is fixed at construction and never mutated at runtime.
#[must_use]
pub fn deck_slides() -> Vec<SlideEntry> {
    vec![
        SlideEntry {
            key: "title",
            title: "Motion for the Web",
            render: || view! { <TitleSlide /> }.into_any(),
        },
        SlideEntry {
            key: "why",
            title: "Why Animate?",
            render: || view! { <WhyMotionSlide /> }.into_any(),
        },
        SlideEntry {
            key: "enter-exit",
            title: "Enter / Exit",
            render: || view! { <EnterExitSlide /> }.into_any(),
        },
        SlideEntry {
            key: "gestures",
            title: "Gestures",
            render: || view! { <GesturesSlide /> }.into_any(),
        },
        SlideEntry {
            key: "thanks",
            title: "Thanks!",
            render: || view! { <ThanksSlide /> }.into_any(),
        },
    ]
}
