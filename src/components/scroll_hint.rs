//! Scroll shortcut hints
//!
//! Static vertical hints at the right viewport edge reminding the
//! presenter of the scroll keys. Purely decorative.

use leptos::prelude::*;

const HINT_TEXT_CSS: &str = "writing-mode: vertical-rl; text-orientation: mixed;";

/// Fixed scroll-shortcut hint column
#[component]
pub fn ScrollHint() -> impl IntoView {
    view! {
        <div
            class="deck-scroll-hint"
            style="position: fixed; top: 50%; right: 16px; transform: translateY(-50%); \
                   opacity: 0.4; font-size: 12px; display: flex; flex-direction: column; \
                   align-items: center; gap: 0.5rem;"
            aria-hidden="true"
        >
            <div style=HINT_TEXT_CSS>"W / ArrowUp: scroll up"</div>
            <div style=HINT_TEXT_CSS>"S / ArrowDown: scroll down"</div>
        </div>
    }
}
