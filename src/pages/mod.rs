//! Page components, one per route

pub mod home;
pub mod not_found;
pub mod slides;

pub use home::Home;
pub use not_found::NotFound;
pub use slides::SlidesPage;
