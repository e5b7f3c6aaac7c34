//! Keyboard command mapping
//!
//! Maps raw `KeyboardEvent::key` strings to deck commands. Slide commands
//! feed the deck controller; scroll commands are pure viewport operations
//! and never touch position or direction.

/// A discrete navigation input, decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    /// Advance one slide (clamped at the end)
    NextSlide,
    /// Go back one slide (clamped at the start)
    PrevSlide,
    /// Scroll the viewport up within the current slide
    ScrollUp,
    /// Scroll the viewport down within the current slide
    ScrollDown,
    /// Jump the viewport to the top of the current slide
    JumpToTop,
    /// Jump the viewport to the bottom of the current slide
    JumpToBottom,
}

/// Pixels moved per scroll command
pub const SCROLL_STEP_PX: f64 = 300.0;

/// Decode a `KeyboardEvent::key` value into a deck command
///
/// Letter bindings (WASD) are case-insensitive; unrecognized keys decode
/// to `None` and are ignored by the listener.
#[must_use]
pub fn command_for_key(key: &str) -> Option<DeckCommand> {
    match key {
        "ArrowRight" => Some(DeckCommand::NextSlide),
        "ArrowLeft" => Some(DeckCommand::PrevSlide),
        "ArrowUp" => Some(DeckCommand::ScrollUp),
        "ArrowDown" => Some(DeckCommand::ScrollDown),
        "Home" => Some(DeckCommand::JumpToTop),
        "End" => Some(DeckCommand::JumpToBottom),
        _ => match key.to_ascii_lowercase().as_str() {
            "d" => Some(DeckCommand::NextSlide),
            "a" => Some(DeckCommand::PrevSlide),
            "w" => Some(DeckCommand::ScrollUp),
            "s" => Some(DeckCommand::ScrollDown),
            _ => None,
        },
    }
}
