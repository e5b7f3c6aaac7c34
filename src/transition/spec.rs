//! Declarative transition descriptors
//!
//! A [`TransitionSpec`] is a plain data structure — start state, end
//! state, duration, easing — rendered to inline CSS; the browser's
//! transition engine does the interpolation. Offsets and timing match the
//! deck's house style: 60 px travel over 350 ms with an ease-out curve.

use crate::deck::Direction;

/// Horizontal travel of an entering/exiting slide, in pixels
pub const SLIDE_OFFSET_PX: f64 = 60.0;

/// Duration of the enter/exit transition, in milliseconds
pub const SLIDE_DURATION_MS: u32 = 350;

/// Timing curve for a transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Fast start, gentle landing
    #[default]
    EaseOut,
    /// Constant rate
    Linear,
}

impl Easing {
    /// CSS timing-function name
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "ease-out",
            Self::Linear => "linear",
        }
    }
}

/// A snapshot of the animated properties at one end of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Horizontal offset from rest, in pixels
    pub translate_x: f64,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
}

impl VisualState {
    /// At-rest state: no offset, fully opaque
    #[must_use]
    pub const fn rest() -> Self {
        Self {
            translate_x: 0.0,
            opacity: 1.0,
        }
    }

    /// Offscreen-tending state at `offset` pixels, fully transparent
    #[must_use]
    pub const fn offset(translate_x: f64) -> Self {
        Self {
            translate_x,
            opacity: 0.0,
        }
    }

    /// Inline CSS for this snapshot (without transition properties)
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "transform: translateX({}px); opacity: {};",
            self.translate_x, self.opacity
        )
    }
}

/// Declarative enter/exit descriptor: start, end, duration, easing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// State the slide mounts with
    pub start: VisualState,
    /// State the slide animates to
    pub end: VisualState,
    /// Animation duration in milliseconds
    pub duration_ms: u32,
    /// Timing curve
    pub easing: Easing,
}

impl TransitionSpec {
    /// Enter descriptor for travel in `direction`
    ///
    /// The incoming slide starts offset on the travel side (to the right
    /// for forward travel, to the left for backward) and transparent,
    /// then settles at rest.
    #[must_use]
    pub fn enter(direction: Direction) -> Self {
        Self {
            start: VisualState::offset(SLIDE_OFFSET_PX * direction.sign() as f64),
            end: VisualState::rest(),
            duration_ms: SLIDE_DURATION_MS,
            easing: Easing::EaseOut,
        }
    }

    /// Exit descriptor for travel in `direction`
    ///
    /// The outgoing slide starts at rest and leaves toward the side
    /// opposite the travel direction, fading out.
    #[must_use]
    pub fn exit(direction: Direction) -> Self {
        Self {
            start: VisualState::rest(),
            end: VisualState::offset(SLIDE_OFFSET_PX * direction.inverted().sign() as f64),
            duration_ms: SLIDE_DURATION_MS,
            easing: Easing::EaseOut,
        }
    }

    /// Inline CSS for the start of the transition (no transition rule yet,
    /// so the mount itself does not animate)
    #[must_use]
    pub fn start_css(&self) -> String {
        self.start.css()
    }

    /// Inline CSS for the end of the transition, including the transition
    /// rule that animates the change from the start state
    #[must_use]
    pub fn end_css(&self) -> String {
        format!(
            "{} transition: transform {}ms {}, opacity {}ms {};",
            self.end.css(),
            self.duration_ms,
            self.easing.css(),
            self.duration_ms,
            self.easing.css()
        )
    }
}
