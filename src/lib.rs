//! Leptos 0.7 CSR slide deck
//!
//! This crate is a client-side rendered presentation app: a linear deck of
//! slides navigated by keyboard or on-screen buttons, with direction-aware
//! enter/exit transitions between slides.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Type-safe routing with leptos_router
//! - Deck state is a pure value type; signals only hold the latest value
//! - CSS transitions interpret declarative enter/exit descriptors
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and navigation
//! - `pages`: Top-level page components
//! - `deck`: Deck controller (position, direction, key commands)
//! - `transition`: Enter/exit transition presenter and lifecycle
//! - `components`: Deck chrome (nav buttons, progress bar, counter)
//! - `slides`: The slide registry and slide content
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod deck;
pub mod error;
pub mod pages;
pub mod router;
pub mod slides;
pub mod transition;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests;
