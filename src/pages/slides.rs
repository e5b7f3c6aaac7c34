//! The deck page
//!
//! Owns the deck state signal and wires every input surface to it: the
//! window keyboard listener and the on-screen Prev/Next buttons both
//! funnel into the same `go` path. Everything below the signal is
//! derived.

use leptos::logging;
use leptos::prelude::*;

use crate::components::{DeckNav, ProgressBar, ScrollHint, SlideCounter};
use crate::deck::{DeckCommand, DeckState, Direction, attach_keyboard_listener};
use crate::slides::deck_slides;
use crate::transition::SlideTransition;

/// Full-viewport presentation page
#[component]
pub fn SlidesPage() -> impl IntoView {
    let slides = deck_slides();
    let total = slides.len();

    let initial = match DeckState::new(total) {
        Ok(state) => state,
        Err(err) => {
            logging::error!("deck construction failed: {err}");
            return view! { <div>"No slides to present."</div> }.into_any();
        }
    };

    let deck = RwSignal::new(initial);
    // try_update: a keydown can race a route change by a tick; a write
    // to the disposed deck signal is dropped rather than panicking
    let go = move |direction: Direction| {
        deck.try_update(|d| *d = d.go(direction));
    };

    let position = Signal::derive(move || deck.get().position());
    let direction = Signal::derive(move || deck.get().direction());
    let progress = Signal::derive(move || deck.get().progress());
    let is_first = Signal::derive(move || deck.get().is_first());
    let is_last = Signal::derive(move || deck.get().is_last());

    // Listener lives exactly as long as this route: detached on
    // cleanup so revisiting /slides never stacks listeners. Scroll
    // commands never reach the deck state.
    match attach_keyboard_listener(move |command| match command {
        DeckCommand::NextSlide => go(Direction::Forward),
        DeckCommand::PrevSlide => go(Direction::Backward),
        DeckCommand::ScrollUp
        | DeckCommand::ScrollDown
        | DeckCommand::JumpToTop
        | DeckCommand::JumpToBottom => {}
    }) {
        Ok(handle) => {
            // Closure handles are not Send; park the handle in local
            // storage so the cleanup closure itself stays Send
            let handle = StoredValue::new_local(Some(handle));
            on_cleanup(move || {
                handle.try_update_value(|slot| {
                    if let Some(listener) = slot.take() {
                        listener.detach();
                    }
                });
            });
        }
        Err(err) => logging::error!("keyboard navigation unavailable: {err}"),
    }

    let render_slide = Callback::new(move |position: usize| {
        slides
            .get(position)
            .map(|entry| (entry.render)())
            .unwrap_or_else(|| view! { <div></div> }.into_any())
    });

    view! {
        <div class="deck-page">
            <SlideTransition position=position direction=direction render_slide=render_slide />

            <DeckNav
                is_first=is_first
                is_last=is_last
                on_prev=Callback::new(move |()| go(Direction::Backward))
                on_next=Callback::new(move |()| go(Direction::Forward))
            />

            <ProgressBar progress=progress />
            <SlideCounter position=position total=total />
            <ScrollHint />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = SlidesPage;
    }
}
