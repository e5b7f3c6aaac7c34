//! Behavioral tests across module boundaries
//!
//! BDD-style tests using given-when-then naming. Single-module behaviors
//! live next to their module in `*_test.rs` files; these suites cover
//! the seams: key presses driving deck state, deck state driving
//! transition descriptors, and the registry feeding the controller.
