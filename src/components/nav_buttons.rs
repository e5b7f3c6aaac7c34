//! Prev/Next navigation buttons
//!
//! Fixed to the lower-left corner. Buttons are disabled at their
//! boundary as an affordance only; the deck state clamps regardless, so
//! a press that slips through is still absorbed.

use leptos::prelude::*;

/// Fixed Prev/Next control pair
#[component]
pub fn DeckNav(
    #[prop(into)] is_first: Signal<bool>,
    #[prop(into)] is_last: Signal<bool>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    let prev_style = move || nav_button_style(is_first.get());
    let next_style = move || nav_button_style(is_last.get());

    view! {
        <div
            class="deck-nav"
            style="position: fixed; bottom: 56px; left: 12px; display: flex; gap: 8px;"
            aria-hidden="true"
        >
            <button
                on:click=move |_| on_prev.run(())
                disabled=move || is_first.get()
                aria-label="Previous slide"
                style=prev_style
            >
                "Prev"
            </button>
            <button
                on:click=move |_| on_next.run(())
                disabled=move || is_last.get()
                aria-label="Next slide"
                style=next_style
            >
                "Next"
            </button>
        </div>
    }
}

/// Inline style for a nav button, dimmed when disabled
fn nav_button_style(disabled: bool) -> String {
    let (cursor, opacity) = if disabled {
        ("not-allowed", "0.5")
    } else {
        ("pointer", "1")
    };
    format!(
        "padding: 8px 12px; border-radius: 8px; \
         border: 1px solid rgba(255,255,255,0.2); background: transparent; \
         color: inherit; cursor: {cursor}; opacity: {opacity};"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = DeckNav;
    }

    #[test]
    fn test_disabled_style_dims_button() {
        let style = nav_button_style(true);
        assert!(style.contains("cursor: not-allowed"));
        assert!(style.contains("opacity: 0.5"));
    }

    #[test]
    fn test_enabled_style_is_clickable() {
        let style = nav_button_style(false);
        assert!(style.contains("cursor: pointer"));
        assert!(style.contains("opacity: 1"));
    }
}
