//! Window keyboard listener and viewport scrolling
//!
//! Registers a `keydown` listener on `window` that decodes key presses
//! into [`DeckCommand`]s and hands them to the caller. The returned
//! handle owns the closure; the deck page detaches it on cleanup so a
//! revisited route never stacks listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::deck::keys::{DeckCommand, SCROLL_STEP_PX, command_for_key};
use crate::error::{DeckUiError, Result};

/// Keyboard listener handle for cleanup
///
/// Keeps the listener's closure alive; dropping the handle without
/// calling [`detach`](Self::detach) would leave a registered listener
/// whose callback has been freed, so the owner must detach.
pub struct KeyboardListenerHandle {
    window: Window,
    closure: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl KeyboardListenerHandle {
    /// Remove the listener from `window` and free its closure
    pub fn detach(self) {
        // Failure means the listener is already gone; either way the
        // closure is dropped with the handle
        let _ = self.window.remove_event_listener_with_callback(
            "keydown",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

/// Attach a `keydown` listener dispatching deck commands
///
/// Slide commands reach `on_command`; scroll/jump commands are executed
/// here directly against the viewport and never reach the deck state.
/// The listener stays registered until the returned handle is detached.
///
/// # Errors
///
/// Returns an error if the window is unavailable or listener
/// registration fails.
pub fn attach_keyboard_listener<F>(on_command: F) -> Result<KeyboardListenerHandle>
where
    F: Fn(DeckCommand) + 'static,
{
    let window = get_window()?;
    let listener_window = window.clone();

    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let Some(command) = command_for_key(&event.key()) else {
            return;
        };

        match command {
            DeckCommand::NextSlide | DeckCommand::PrevSlide => on_command(command),
            DeckCommand::ScrollUp
            | DeckCommand::ScrollDown
            | DeckCommand::JumpToTop
            | DeckCommand::JumpToBottom => apply_scroll_command(&listener_window, command),
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|e| DeckUiError::ListenerFailed(format!("{e:?}")))?;

    Ok(KeyboardListenerHandle { window, closure })
}

/// Execute a viewport scroll/jump command with smooth behavior
fn apply_scroll_command(window: &Window, command: DeckCommand) {
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);

    match command {
        DeckCommand::ScrollUp => {
            options.set_top(-SCROLL_STEP_PX);
            window.scroll_by_with_scroll_to_options(&options);
        }
        DeckCommand::ScrollDown => {
            options.set_top(SCROLL_STEP_PX);
            window.scroll_by_with_scroll_to_options(&options);
        }
        DeckCommand::JumpToTop => {
            options.set_top(0.0);
            window.scroll_to_with_scroll_to_options(&options);
        }
        DeckCommand::JumpToBottom => {
            let bottom = window
                .document()
                .and_then(|d| d.body())
                .map_or(0.0, |body| f64::from(body.scroll_height()));
            options.set_top(bottom);
            window.scroll_to_with_scroll_to_options(&options);
        }
        DeckCommand::NextSlide | DeckCommand::PrevSlide => {}
    }
}

/// Get window object
fn get_window() -> Result<Window> {
    web_sys::window().ok_or(DeckUiError::WindowNotAvailable)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn press(key: &str) {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        let event =
            web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_attached_listener_receives_slide_commands() {
        let seen = Rc::new(Cell::new(None::<DeckCommand>));
        let sink = seen.clone();

        let handle = attach_keyboard_listener(move |command| sink.set(Some(command))).unwrap();
        press("ArrowRight");
        assert_eq!(seen.get(), Some(DeckCommand::NextSlide));

        handle.detach();
    }

    #[wasm_bindgen_test]
    fn test_detached_listener_no_longer_fires() {
        let count = Rc::new(Cell::new(0_u32));
        let sink = count.clone();

        let handle = attach_keyboard_listener(move |_| sink.set(sink.get() + 1)).unwrap();
        press("ArrowRight");
        assert_eq!(count.get(), 1);

        handle.detach();
        press("ArrowRight");
        press("ArrowLeft");
        assert_eq!(count.get(), 1, "detached listener must not fire");
    }

    #[wasm_bindgen_test]
    fn test_reattach_after_detach_does_not_stack() {
        // A page revisit attaches a new listener after the old one is
        // detached; one press must dispatch exactly one command
        let count = Rc::new(Cell::new(0_u32));

        let sink = count.clone();
        let first = attach_keyboard_listener(move |_| sink.set(sink.get() + 1)).unwrap();
        first.detach();

        let sink = count.clone();
        let second = attach_keyboard_listener(move |_| sink.set(sink.get() + 1)).unwrap();
        press("d");
        assert_eq!(count.get(), 1, "exactly one live listener may fire");

        second.detach();
    }
}
