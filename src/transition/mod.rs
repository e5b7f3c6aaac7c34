//! Transition presenter: enter/exit animation between slides
//!
//! A position change makes the outgoing slide exit toward the side
//! opposite the travel direction while the incoming slide enters from the
//! travel side. The outgoing slide stays mounted until its exit animation
//! completes; rapid navigation replaces any in-flight exit
//! (last-direction-wins, no queueing).

pub mod phase;
pub mod presenter;
pub mod spec;



pub use phase::SlidePhase;
pub use presenter::SlideTransition;
pub use spec::{Easing, SLIDE_DURATION_MS, SLIDE_OFFSET_PX, TransitionSpec, VisualState};
