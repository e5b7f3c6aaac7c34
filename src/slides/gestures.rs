//! Gesture demo slide
//!
//! A press-scale button with a tap counter. The counter lives and dies
//! with this slide instance.

use leptos::prelude::*;

use crate::components::PresenterNotes;

const NOTES: &str = "Gestures:\n\
    - Ask someone to count taps with you; the counter is slide-local.\n\
    - Press feedback is one flag plus one transition, no library magic.\n\
    - Note the counter resets if you leave and come back.";

/// Press/tap demo with an instance-local counter
#[component]
pub fn GesturesSlide() -> impl IntoView {
    let taps = RwSignal::new(0_u32);
    let pressed = RwSignal::new(false);

    let button_style = move || {
        let scale = if pressed.get() { "0.92" } else { "1" };
        format!(
            "padding: 16px 32px; font-size: 1.2rem; border-radius: 12px; border: none; \
             background: #6366f1; color: white; cursor: pointer; \
             transform: scale({scale}); transition: transform 120ms ease-out;"
        )
    };

    view! {
        <PresenterNotes notes=NOTES />
        <div style="max-width: 960px; width: 100%; padding: 4rem 2rem 0; text-align: center;">
            <h2 style="font-size: 2.5rem; margin-bottom: 1rem;">"Gestures"</h2>
            <p style="opacity: 0.8; margin-bottom: 2rem;">
                "Press feedback is a transition on a pressed flag, nothing more."
            </p>
            <button
                on:pointerdown=move |_| pressed.set(true)
                on:pointerup=move |_| {
                    pressed.set(false);
                    taps.update(|t| *t += 1);
                }
                on:pointerleave=move |_| pressed.set(false)
                style=button_style
            >
                "Tap me"
            </button>
            <p style="margin-top: 1.5rem; opacity: 0.6;">
                {move || format!("{} taps this visit", taps.get())}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = GesturesSlide;
    }

    #[test]
    fn test_notes_are_populated() {
        assert!(!NOTES.is_empty());
    }
}
