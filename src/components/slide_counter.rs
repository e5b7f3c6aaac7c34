//! "current / total" position readout

use leptos::prelude::*;

/// Fixed top-right slide counter; displays the position 1-based
#[component]
pub fn SlideCounter(#[prop(into)] position: Signal<usize>, total: usize) -> impl IntoView {
    view! {
        <div
            class="deck-counter"
            style="position: fixed; top: 12px; right: 16px; opacity: 0.6; font-size: 14px;"
            aria-hidden="true"
        >
            {move || format!("{} / {}", position.get() + 1, total)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = SlideCounter;
    }
}
