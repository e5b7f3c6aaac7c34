//! Router configuration for the deck app
//!
//! This module defines the routes and navigation structure for the application.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Home, NotFound, SlidesPage};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const SLIDES: &str = "/slides";
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Home />
                <Route path=StaticSegment("slides") view=SlidesPage />
            </Routes>
        </Router>
    }
}
