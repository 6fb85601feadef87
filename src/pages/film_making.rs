//! Film making page - productions with local and YouTube videos.

use dioxus::prelude::*;
use portfolio_core::Category;

use super::CategoryGallery;

#[component]
pub fn FilmMaking() -> Element {
    rsx! {
        CategoryGallery { category: Category::FilmMaking }
    }
}
