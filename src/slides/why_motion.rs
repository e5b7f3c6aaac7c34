//! Motivation slide with expandable talking points
//!
//! Which point is expanded is instance-local state: it resets every time
//! the slide mounts and is never shared with other slides.

use leptos::prelude::*;

use crate::components::PresenterNotes;

const NOTES: &str = "Motivation:\n\
    - Click each point open; let the expansion do the arguing.\n\
    - Attention, state changes, polish: in that order.\n\
    - Keep it short, the demos carry this deck.";

struct TalkingPoint {
    title: &'static str,
    summary: &'static str,
}

const POINTS: [TalkingPoint; 3] = [
    TalkingPoint {
        title: "Guide attention",
        summary: "Movement tells the eye where to look next.",
    },
    TalkingPoint {
        title: "Explain state changes",
        summary: "A list item sliding out reads as deletion without a label.",
    },
    TalkingPoint {
        title: "Feel of quality",
        summary: "Well-timed easing is most of what people call polish.",
    },
];

/// Why-animate slide; click a point to expand it
#[component]
pub fn WhyMotionSlide() -> impl IntoView {
    let expanded = RwSignal::new(None::<usize>);

    view! {
        <PresenterNotes notes=NOTES />
        <div style="max-width: 960px; width: 100%; padding: 4rem 2rem 0;">
            <h2 style="font-size: 2.5rem; margin-bottom: 2rem;">"Why Animate?"</h2>
            {POINTS
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    let title = point.title;
                    let summary = point.summary;
                    view! {
                        <div
                            on:click=move |_| {
                                expanded.update(|e| {
                                    *e = if *e == Some(i) { None } else { Some(i) };
                                })
                            }
                            style="padding: 1rem; margin-bottom: 0.75rem; border-radius: 8px; \
                                   border: 1px solid rgba(255,255,255,0.2); cursor: pointer;"
                        >
                            <h3 style="margin: 0; font-size: 1.4rem;">{title}</h3>
                            <Show when=move || expanded.get() == Some(i)>
                                <p style="margin: 0.5rem 0 0; opacity: 0.8;">{summary}</p>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = WhyMotionSlide;
    }

    #[test]
    fn test_talking_points_are_populated() {
        for point in &POINTS {
            assert!(!point.title.is_empty());
            assert!(!point.summary.is_empty());
        }
    }

    #[test]
    fn test_notes_are_populated() {
        assert!(!NOTES.is_empty());
    }
}
