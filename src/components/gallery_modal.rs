//! Gallery Modal Component
//!
//! Full-screen viewer for the open catalog entry, with clamped
//! previous/next navigation.

use dioxus::prelude::*;

use crate::components::{BackButton, PlaybackSurface};
use crate::context::GalleryHandle;

/// Modal viewer bound to a gallery controller
///
/// Renders nothing while the controller is closed. Closing unmounts the
/// playback surface, which stops any video or embed.
///
/// Keyboard: Escape closes, ArrowLeft/ArrowRight step through entries.
///
/// # Example
///
/// ```ignore
/// let gallery = use_gallery(catalog);
/// rsx! {
///     GalleryModal { gallery }
/// }
/// ```
#[component]
pub fn GalleryModal(gallery: GalleryHandle) -> Element {
    let view = gallery.with(|controller| {
        let entry = controller.current_entry()?.clone();
        let descriptor = controller.current_descriptor()?;
        Some((
            entry,
            descriptor,
            controller.active_index().unwrap_or_default(),
            controller.catalog().len(),
            controller.is_at_start(),
            controller.is_at_end(),
        ))
    });

    let Some((entry, descriptor, index, total, at_start, at_end)) = view else {
        return rsx! {};
    };

    let generation = gallery.shell().playback_generation;
    let surface_key = format!("{}-{}", generation, entry.id);

    let handle_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => gallery.close(),
        Key::ArrowRight => {
            gallery.next();
        }
        Key::ArrowLeft => {
            gallery.previous();
        }
        _ => {}
    };

    rsx! {
        div {
            class: "modal-overlay",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{entry.title}",
            tabindex: "-1",
            onclick: move |_| gallery.close(),
            onkeydown: handle_keydown,
            onmounted: move |evt| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("Gallery modal could not take focus: {:?}", e);
                }
            },

            BackButton {
                class: "modal-back",
                aria_label: "Close and go back",
                on_click: move |_| gallery.close(),
            }

            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                PlaybackSurface {
                    key: "{surface_key}",
                    descriptor,
                    title: entry.title.clone(),
                }

                div { class: "modal-caption",
                    h3 { "{entry.title}" }
                    if !entry.description.is_empty() {
                        p { "{entry.description}" }
                    }
                }

                if total > 1 {
                    div { class: "modal-nav",
                        button {
                            class: "modal-nav__btn",
                            "aria-label": "Previous project",
                            disabled: at_start,
                            onclick: move |_| {
                                gallery.previous();
                            },
                            "‹"
                        }
                        span { class: "modal-nav__position", "{index + 1} / {total}" }
                        button {
                            class: "modal-nav__btn",
                            "aria-label": "Next project",
                            disabled: at_end,
                            onclick: move |_| {
                                gallery.next();
                            },
                            "›"
                        }
                    }
                }
            }
        }
    }
}
