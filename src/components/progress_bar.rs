//! Linear deck progress indicator
//!
//! A fixed bar along the bottom edge whose fill width tracks progress
//! through the deck; the width change itself is animated with a short
//! CSS transition.

use leptos::prelude::*;

/// Fill-width transition duration, in milliseconds
const FILL_TRANSITION_MS: u32 = 200;

/// Fixed bottom progress bar; `progress` is a percentage in `[0, 100]`
#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    let fill_style = move || {
        format!(
            "height: 100%; background: #6366f1; border-radius: 4px; \
             width: {}%; transition: width {}ms ease-out;",
            progress.get(),
            FILL_TRANSITION_MS
        )
    };

    view! {
        <div
            class="deck-progress"
            style="position: fixed; bottom: 12px; left: 12px; right: 12px; \
                   height: 4px; background: rgba(255,255,255,0.15); border-radius: 4px;"
            aria-hidden="true"
        >
            <div class="deck-progress-fill" style=fill_style></div>
        </div>
    }
}
