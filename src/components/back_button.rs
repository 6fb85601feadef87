//! Back Button Component
//!
//! Arrow + label button used to leave a category page or close the modal.

use dioxus::prelude::*;

use crate::app::Route;
use crate::theme::colors::TEXT_PRIMARY;

/// Back button
///
/// Navigates to `to` when given, otherwise calls `on_click`.
///
/// # Example
///
/// ```ignore
/// rsx! {
///     BackButton { to: Route::Home {} }
///     BackButton { on_click: move |_| gallery.close(), label: "Close" }
/// }
/// ```
#[component]
pub fn BackButton(
    /// Route to navigate to
    #[props(default)]
    to: Option<Route>,
    /// Click handler used when no route is given
    #[props(default)]
    on_click: Option<EventHandler<()>>,
    /// Accessible label
    #[props(default = "Go back".to_string())]
    aria_label: String,
    /// Extra class names
    #[props(default)]
    class: String,
) -> Element {
    let class = format!("back {}", class);

    match to {
        Some(route) => rsx! {
            Link { to: route, class: "{class}", "aria-label": "{aria_label}",
                BackArrow {}
                span { "Back" }
            }
        },
        None => rsx! {
            button {
                class: "{class}",
                "aria-label": "{aria_label}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    if let Some(handler) = &on_click {
                        handler.call(());
                    }
                },
                BackArrow {}
                span { "Back" }
            }
        },
    }
}

#[component]
fn BackArrow() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "30",
            height: "30",
            view_box: "0 0 200 200",
            fill: TEXT_PRIMARY,
            g {
                path { d: "M186.3 96H32.2l28-15.5 3.4-1.8-3.7-6.7-3.3 1.8-40.8 22.5-5.9 3.3 5.9 3.4 40.4 23.1 3.3 1.9 3.7-6.6-3.3-1.9-27.8-15.9h158V96h-3.8z" }
            }
        }
    }
}
