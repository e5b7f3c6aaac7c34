//! Deck navigation state
//!
//! `DeckState` owns the current slide position and the direction of the
//! most recent navigation request for a deck of fixed length. Updates are
//! functional: [`DeckState::go`] returns the next state rather than
//! mutating in place, so the latest value can live in a single signal.

use crate::error::{DeckUiError, Result};

/// Travel sense of the most recent navigation request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the deck
    #[default]
    Forward,
    /// Toward the start of the deck
    Backward,
}

impl Direction {
    /// Signed unit step for this direction
    #[must_use]
    pub const fn sign(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// The opposite travel sense
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Position and direction for a deck of fixed length
///
/// Invariants: `len >= 1` (enforced at construction) and
/// `0 <= position < len` (enforced by clamping in `go`). Boundary
/// overshoot is silently absorbed: the position stays put, but the
/// direction still records the latest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckState {
    position: usize,
    direction: Direction,
    len: usize,
}

impl DeckState {
    /// Create state for a deck of `len` slides, starting at the first
    ///
    /// # Errors
    ///
    /// Returns [`DeckUiError::EmptyDeck`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(DeckUiError::EmptyDeck);
        }
        Ok(Self {
            position: 0,
            direction: Direction::Forward,
            len,
        })
    }

    /// Navigate one step in `direction`, clamped to the deck bounds
    ///
    /// The sole mutation path for position and direction. Direction is
    /// recorded unconditionally, even when clamping absorbs the move, so
    /// a replayed transition uses the latest requested travel sense.
    #[must_use]
    pub fn go(self, direction: Direction) -> Self {
        let next = self.position.saturating_add_signed(direction.sign());
        Self {
            position: next.min(self.len - 1),
            direction,
            ..self
        }
    }

    /// Zero-based index of the current slide
    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// Direction of the most recent navigation request
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Number of slides in the deck (always >= 1)
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// True iff the first slide is current
    #[must_use]
    pub const fn is_first(self) -> bool {
        self.position == 0
    }

    /// True iff the last slide is current
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.position == self.len - 1
    }

    /// Completion through the deck as a percentage in `[0, 100]`
    ///
    /// Defined as 0 for a single-slide deck.
    #[must_use]
    pub fn progress(self) -> f64 {
        if self.len <= 1 {
            return 0.0;
        }
        self.position as f64 / (self.len - 1) as f64 * 100.0
    }
}
