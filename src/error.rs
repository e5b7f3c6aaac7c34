//! Error types for the deck UI
//!
//! The navigation core itself has no recoverable errors (boundary
//! overshoot is a clamp, not a failure); errors here cover construction
//! and the browser boundary.

/// Errors that can occur in the deck UI
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckUiError {
    /// A deck must hold at least one slide
    #[error("deck must contain at least one slide")]
    EmptyDeck,

    /// Failed to get window object
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// Failed to register an event listener
    #[error("failed to register listener: {0}")]
    ListenerFailed(String),
}

/// Result type alias for deck UI operations
pub type Result<T> = std::result::Result<T, DeckUiError>;
