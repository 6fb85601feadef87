//! Category gallery page shared by editing, fashion and film-making.
//!
//! One gallery controller per page, parameterized by the category catalog.

use dioxus::prelude::*;
use portfolio_core::{Category, ProjectCatalog};

use crate::app::Route;
use crate::components::{BackButton, GalleryModal, ProjectCard};
use crate::context::{use_gallery, use_site_config};

/// Grid of project cards with a modal viewer.
#[component]
pub fn CategoryGallery(
    category: Category,
    /// Show "View Now" under each card
    #[props(default)]
    call_to_action: bool,
) -> Element {
    let site = use_site_config();
    let catalog = use_hook(|| site.read().catalog(category).map_err(|e| e.to_string()));

    match catalog {
        Ok(catalog) => rsx! {
            GalleryPage { category, catalog, call_to_action }
        },
        Err(e) => {
            tracing::error!("No catalog for {}: {}", category.slug(), e);
            rsx! {
                BackButton { to: Route::Home {} }
                h2 { class: "project-header", "{category.display_name()}" }
                p { class: "empty-state", "Nothing to show here yet." }
            }
        }
    }
}

#[component]
fn GalleryPage(category: Category, catalog: ProjectCatalog, call_to_action: bool) -> Element {
    let site = use_site_config();
    let intro = site.read().intro(category).to_vec();
    let gallery = use_gallery(catalog.clone());
    let shell = gallery.shell();
    let modal_open = gallery.with(|controller| controller.is_open());

    let backdrop_class = if shell.background_suppressed {
        "gallery-backdrop suppressed"
    } else {
        "gallery-backdrop"
    };

    rsx! {
        if !modal_open {
            BackButton { to: Route::Home {} }
        }

        div { class: "{backdrop_class}", "aria-hidden": "{modal_open}",
            h2 { class: "project-header", "{category.display_name()}" }
            main { class: "gallery",
                div { class: "gallery__intro",
                    for paragraph in intro.iter() {
                        p { "{paragraph}" }
                    }
                }
                div { class: "gallery__grid",
                    for (index, entry) in catalog.iter().enumerate() {
                        ProjectCard {
                            key: "{entry.id}",
                            entry: entry.clone(),
                            index,
                            call_to_action,
                            class: card_span(catalog.len(), index),
                            on_open: move |i| {
                                gallery.open(i);
                            },
                        }
                    }
                }
            }
        }

        GalleryModal { gallery }
    }
}

/// Grid span for a card; a trailing odd card spans the full row
fn card_span(total: usize, index: usize) -> String {
    if total % 2 == 1 && index + 1 == total {
        "gallery__cell gallery__cell--wide".to_string()
    } else {
        "gallery__cell".to_string()
    }
}
