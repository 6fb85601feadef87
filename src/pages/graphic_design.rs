//! Graphic design page - masonry grid linking into numbered project subpages.

use dioxus::prelude::*;
use portfolio_core::{Category, SubpageQuery};

use super::subpages::subpage_route;
use crate::app::Route;
use crate::components::{AnimatedImage, BackButton};
use crate::context::use_site_config;

/// Row spans of the masonry grid, repeated for longer catalogs
const ROW_SPANS: [u8; 5] = [1, 2, 3, 4, 3];

#[component]
pub fn GraphicDesign() -> Element {
    let site = use_site_config();
    let catalog = site.read().catalog(Category::GraphicDesign);

    let tiles = match catalog {
        Ok(catalog) => catalog.entries().to_vec(),
        Err(e) => {
            tracing::error!("No graphic design catalog: {}", e);
            Vec::new()
        }
    };

    rsx! {
        BackButton { to: Route::Home {} }
        h2 { class: "project-header", "{Category::GraphicDesign.display_name()}" }
        main { class: "gallery",
            div { class: "masonry",
                for (index, entry) in tiles.into_iter().enumerate() {
                    Link {
                        key: "{entry.id}",
                        to: subpage_route(SubpageQuery::for_project(Category::GraphicDesign, index + 1)),
                        class: "masonry__tile masonry__tile--rows-{ROW_SPANS[index % ROW_SPANS.len()]}",
                        AnimatedImage {
                            src: entry.thumbnail.clone(),
                            alt: entry.alt_text().to_string(),
                            zoom_on_hover: true,
                            class: "masonry__image",
                        }
                    }
                }
            }
        }
    }
}
