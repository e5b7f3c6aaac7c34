//! Deck controller: position, direction, and input commands
//!
//! The controller is a pure value type (`DeckState`) plus the key-command
//! mapping and the browser listener that feeds it. Position and direction
//! are mutated only through [`DeckState::go`]; everything else is derived.

pub mod keys;
pub mod listener;
pub mod state;

#[cfg(test)]
mod keys_test;


pub use keys::{DeckCommand, command_for_key};
pub use listener::{KeyboardListenerHandle, attach_keyboard_listener};
pub use state::{DeckState, Direction};
