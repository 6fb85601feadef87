//! Fallback page for unknown routes.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::BackButton;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "Unknown route");

    rsx! {
        main { class: "not-found",
            BackButton { to: Route::Home {} }
            h2 { class: "project-header", "Page not found" }
            p { "Nothing lives at {path}." }
        }
    }
}
