//! Fallback page for unknown routes

use leptos::prelude::*;

use crate::router::routes;

/// 404 fallback component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main style="min-height: 100vh; display: grid; place-items: center;">
            <div style="text-align: center;">
                <h1 style="font-size: 2rem;">"Page not found"</h1>
                <a href=routes::HOME style="color: #6366f1;">"Back to start"</a>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = NotFound;
    }
}
