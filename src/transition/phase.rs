//! Per-slide lifecycle phases
//!
//! Every slide instance moves through `Entering -> Settled -> Exiting ->
//! Removed`, one step at a time. There is no resurrection: once an
//! instance starts exiting it can only finish; a position that becomes
//! current again mid-exit mounts as a brand-new entering instance.

/// Lifecycle phase of a single slide instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// Animating into view (initial phase on becoming current)
    Entering,
    /// At rest as the current slide
    Settled,
    /// Animating out of view after losing currency
    Exiting,
    /// Unmounted (terminal)
    Removed,
}

impl SlidePhase {
    /// The next phase in the lifecycle, if any
    ///
    /// `Removed` is terminal and has no successor.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Entering => Some(Self::Settled),
            Self::Settled => Some(Self::Exiting),
            Self::Exiting => Some(Self::Removed),
            Self::Removed => None,
        }
    }

    /// Whether a transition from `self` to `target` is legal
    ///
    /// Only single forward steps are legal; phases are never skipped and
    /// never revisited.
    #[must_use]
    pub const fn can_become(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Entering, Self::Settled)
                | (Self::Settled, Self::Exiting)
                | (Self::Exiting, Self::Removed)
        )
    }

    /// Whether the instance is still mounted in the rendered tree
    #[must_use]
    pub const fn is_mounted(self) -> bool {
        !matches!(self, Self::Removed)
    }

    /// Lowercase name, used as a `data-phase` attribute on slide panels
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entering => "entering",
            Self::Settled => "settled",
            Self::Exiting => "exiting",
            Self::Removed => "removed",
        }
    }
}
