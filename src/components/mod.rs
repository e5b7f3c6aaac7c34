//! Deck chrome components
//!
//! Fixed-position UI around the slides: prev/next buttons, progress bar,
//! slide counter, scroll hints, and the presenter-notes overlay.

pub mod nav_buttons;
pub mod presenter_notes;
pub mod progress_bar;
pub mod scroll_hint;
pub mod slide_counter;

pub use nav_buttons::DeckNav;
pub use presenter_notes::PresenterNotes;
pub use progress_bar::ProgressBar;
pub use scroll_hint::ScrollHint;
pub use slide_counter::SlideCounter;
