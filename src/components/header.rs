//! Site Header Component
//!
//! Logo, Home link, Projects dropdown and Info anchor.

use dioxus::prelude::*;
use portfolio_core::Category;

use crate::app::Route;
use crate::context::use_page_shell;

/// Route for a category page
pub fn category_route(category: Category) -> Route {
    match category {
        Category::GraphicDesign => Route::GraphicDesign {},
        Category::Editing => Route::Editing {},
        Category::Fashion => Route::Fashion {},
        Category::FilmMaking => Route::FilmMaking {},
    }
}

/// Id of the home page's Info section
pub const INFO_ANCHOR: &str = "info";

/// Smooth-scroll a mounted section into view
pub fn scroll_to_anchor(anchor: &str) {
    let _ = document::eval(&format!(
        "document.getElementById('{anchor}')?.scrollIntoView({{ behavior: 'smooth' }});"
    ));
}

/// Site header
///
/// Dimmed and inert while a gallery modal suppresses the background.
#[component]
pub fn Header() -> Element {
    let mut shell = use_page_shell();
    let on_home = matches!(use_route::<Route>(), Route::Home {});
    let mut projects_open = use_signal(|| false);

    let header_class = if shell().background_suppressed {
        "site-header suppressed"
    } else {
        "site-header"
    };

    rsx! {
        header { class: "{header_class}",
            div { class: "site-header__inner",
                Link { to: Route::Home {}, class: "site-header__logo",
                    img { src: "/mash-logo.png", alt: "Mash's logo", width: "130", height: "130" }
                }

                nav { class: "site-nav",
                    ul {
                        li {
                            Link {
                                to: Route::Home {},
                                class: "site-nav__link",
                                active_class: "active",
                                "Home"
                            }
                        }
                        li {
                            class: "site-nav__dropdown",
                            onmouseenter: move |_| projects_open.set(true),
                            onmouseleave: move |_| projects_open.set(false),

                            button {
                                class: "site-nav__link",
                                "aria-haspopup": "true",
                                "aria-expanded": "{projects_open()}",
                                onclick: move |_| projects_open.set(!projects_open()),
                                "Projects"
                            }

                            if projects_open() {
                                div { class: "site-nav__menu",
                                    for category in Category::ALL {
                                        Link {
                                            key: "{category.slug()}",
                                            to: category_route(category),
                                            class: "site-nav__item",
                                            onclick: move |_| projects_open.set(false),
                                            "{category.display_name()}"
                                        }
                                    }
                                }
                            }
                        }
                        li {
                            Link {
                                to: Route::Home {},
                                class: "site-nav__link",
                                onclick: move |_| {
                                    // Home is not mounted yet; it scrolls once it is
                                    if on_home {
                                        scroll_to_anchor(INFO_ANCHOR);
                                    } else {
                                        shell.write().request_anchor(INFO_ANCHOR);
                                    }
                                },
                                "Info"
                            }
                        }
                    }
                }
            }
        }
    }
}
