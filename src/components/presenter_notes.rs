//! Presenter notes overlay
//!
//! A small fixed toggle button plus an overlay panel with the current
//! slide's speaker notes. Visibility is local to the slide instance that
//! mounts this component: it is created hidden on mount and discarded on
//! unmount, never shared across slides.

use leptos::prelude::*;

/// Notes toggle button and overlay panel
#[component]
pub fn PresenterNotes(notes: &'static str) -> impl IntoView {
    let visible = RwSignal::new(false);

    let toggle_style = move || {
        let background = if visible.get() {
            "rgba(239, 68, 68, 0.3)"
        } else {
            "rgba(99, 102, 241, 0.2)"
        };
        format!(
            "position: fixed; top: 10px; left: 10px; width: 20px; height: 20px; \
             padding: 0; font-size: 10px; border-radius: 50%; border: none; \
             background: {background}; color: rgba(255, 255, 255, 0.6); \
             cursor: pointer; z-index: 1000;"
        )
    };

    view! {
        <button
            on:click=move |_| visible.update(|v| *v = !*v)
            style=toggle_style
            title=move || {
                if visible.get() { "Hide presenter notes" } else { "Show presenter notes" }
            }
        >
            "N"
        </button>

        <Show when=move || visible.get()>
            <div
                class="presenter-notes"
                style="position: fixed; top: 70px; right: 20px; width: 400px; \
                       max-height: calc(100vh - 100px); background: rgba(0, 0, 0, 0.95); \
                       color: white; padding: 1.5rem; border-radius: 8px; \
                       font-size: 0.9rem; line-height: 1.5; overflow: auto; z-index: 999; \
                       border: 1px solid rgba(255, 255, 255, 0.2);"
            >
                <h4 style="margin: 0 0 1rem 0; color: #6366f1;">"Presenter Notes"</h4>
                <pre style="white-space: pre-wrap; margin: 0; font-family: inherit;">
                    {notes}
                </pre>
            </div>
        </Show>
    }
}
