//! Home page - hero, project categories and contact info.

use dioxus::prelude::*;
use portfolio_core::Category;

use crate::components::{category_route, scroll_to_anchor, AnimatedImage, INFO_ANCHOR};
use crate::context::{use_page_shell, use_site_config};
use crate::theme::colors::TEXT_PRIMARY;

/// Landing card thumbnail for each category
fn category_thumbnail(category: Category) -> &'static str {
    match category {
        Category::GraphicDesign => "/projects-1.avif",
        Category::Editing => "/projects-2.avif",
        Category::Fashion => "/projects-3.avif",
        Category::FilmMaking => "/projects-4.avif",
    }
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let site = use_site_config();
    let site = site.read();
    let mut shell = use_page_shell();

    // Finish an Info link followed from another page
    use_effect(move || {
        if shell.peek().pending_anchor.is_some() {
            if let Some(anchor) = shell.write().take_anchor() {
                scroll_to_anchor(anchor);
            }
        }
    });

    let scroll_to_top = move |_| {
        let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
    };

    rsx! {
        main { class: "home",
            section { class: "backdrop",
                div { class: "credit-roll",
                    div { id: "portfolio", class: "hero",
                        h1 { "PORTFOLIO" }
                        span { class: "hero__credits",
                            span { "{site.name}" }
                            span { "{site.tagline}" }
                        }
                    }
                }
            }

            section { id: "projects", class: "section",
                div {
                    h2 { class: "section__title", "Projects" }
                    div { class: "section__rule" }
                }
                div { class: "category-grid",
                    for category in Category::ALL {
                        Link {
                            key: "{category.slug()}",
                            to: category_route(category),
                            class: "category-card",
                            span { "{category.display_name()}" }
                            img {
                                src: category_thumbnail(category),
                                alt: "Image of the {category.display_name()} project",
                                width: "600",
                                height: "600",
                            }
                        }
                    }
                }
            }

            section { id: INFO_ANCHOR, class: "section info reveal-up",
                h2 { class: "section__title", "Info" }
                div { class: "info__dots",
                    for _ in 0..3 {
                        svg {
                            xmlns: "http://www.w3.org/2000/svg",
                            width: "10",
                            height: "10",
                            view_box: "0 0 200 200",
                            "aria-hidden": "true",
                            circle { cx: "100", cy: "100", r: "100", fill: TEXT_PRIMARY }
                        }
                    }
                }
                p { class: "info__about", "{site.about}" }
                p { class: "info__contact",
                    a { href: "mailto:{site.contact.email}", "Email: {site.contact.email}" }
                    br {}
                    span { "Tel: {site.contact.phone}" }
                }
                a { href: "{site.contact.instagram}", target: "_blank",
                    AnimatedImage {
                        src: "/instagram.avif",
                        alt: "Mash's Avatar",
                        width: 40,
                        height: 40,
                        class: "info__instagram",
                    }
                }
            }

            button {
                class: "chevron-up",
                "aria-label": "Scroll to top",
                onclick: scroll_to_top,
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "30",
                    height: "30",
                    view_box: "19 56 162 89",
                    polygon { fill: TEXT_PRIMARY, points: "181,64 173,56 100,128 27,56 19,64 100,145" }
                }
            }
        }
    }
}
