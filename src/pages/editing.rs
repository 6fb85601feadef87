//! Editing page - client edits, local videos and a YouTube embed.

use dioxus::prelude::*;
use portfolio_core::Category;

use super::CategoryGallery;

#[component]
pub fn Editing() -> Element {
    rsx! {
        CategoryGallery { category: Category::Editing, call_to_action: true }
    }
}
