//! Project Card Component
//!
//! Clickable grid tile for one catalog entry.

use dioxus::prelude::*;
use portfolio_core::ProjectEntry;

use crate::components::AnimatedImage;

/// Grid tile that opens its entry in the gallery modal
///
/// Activates on click and on Enter/Space for keyboard users.
#[component]
pub fn ProjectCard(
    entry: ProjectEntry,
    /// Position of the entry in its catalog
    index: usize,
    /// Called with `index` when activated
    on_open: EventHandler<usize>,
    /// Show the "View Now" call to action under the thumbnail
    #[props(default)]
    call_to_action: bool,
    /// Extra class names (grid spans)
    #[props(default)]
    class: String,
) -> Element {
    let label = format!("Open {}", entry.title);

    rsx! {
        div {
            class: "project-card project-hoverable {class}",
            role: "button",
            tabindex: "0",
            "aria-label": "{label}",
            onclick: move |_| on_open.call(index),
            onkeydown: move |evt: KeyboardEvent| {
                let activate = match evt.key() {
                    Key::Enter => true,
                    Key::Character(c) => c == " ",
                    _ => false,
                };
                if activate {
                    evt.prevent_default();
                    on_open.call(index);
                }
            },

            div { class: "project-card__body",
                AnimatedImage {
                    src: entry.thumbnail.clone(),
                    alt: entry.alt_text().to_string(),
                    width: 500,
                    height: 500,
                }
                if call_to_action {
                    span { class: "project-card__cta", "View Now" }
                }
                if !entry.description.is_empty() {
                    p { class: "project-card__description", "{entry.description}" }
                }
            }
        }
    }
}
