//! Fashion page - show pieces in an image carousel.

use dioxus::prelude::*;
use portfolio_core::Category;

use super::CategoryGallery;

#[component]
pub fn Fashion() -> Element {
    rsx! {
        CategoryGallery { category: Category::Fashion }
    }
}
