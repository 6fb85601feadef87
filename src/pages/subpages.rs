//! Graphic design subpages - one numbered project at a time.
//!
//! The project number arrives as the `projectHeader` query parameter
//! (`Project N`). Paging between projects and paging between slides use
//! two independent cursors; switching project starts at the first slide.

use dioxus::prelude::*;
use portfolio_core::{project_header, Category, ProjectBrowser, SubpageQuery};

use crate::app::Route;
use crate::components::{AnimatedImage, BackButton};
use crate::context::use_site_config;

/// Route for a subpage query
pub fn subpage_route(query: SubpageQuery) -> Route {
    Route::Subpages {
        projectGenre: query.project_genre,
        projectHeader: query.project_header,
        project: query.project,
    }
}

/// Move to the neighbouring project and push its route
///
/// The browser resets the slide cursor itself; the route push only keeps
/// the address bar in sync.
fn step_project(
    mut browser: Signal<Option<ProjectBrowser>>,
    navigator: Navigator,
    category: Category,
    forward: bool,
) {
    let moved_to = browser.with_mut(|b| {
        let b = b.as_mut()?;
        let moved = if forward { b.next_project() } else { b.previous_project() };
        moved.then(|| b.project_number())
    });

    if let Some(project_number) = moved_to {
        navigator.push(subpage_route(SubpageQuery::for_project(category, project_number)));
    }
}

#[component]
pub fn Subpages(projectGenre: String, projectHeader: String, project: String) -> Element {
    let site = use_site_config();
    let navigator = use_navigator();

    let query = SubpageQuery {
        project_genre: projectGenre,
        project_header: projectHeader,
        project,
    };
    let category = query.category().unwrap_or(Category::GraphicDesign);
    let total = site.read().catalog(category).map(|c| c.len()).unwrap_or(0);
    let slides_per_project = site.read().subpage_slides;
    let requested = query.project_number(total);

    let mut browser =
        use_signal(move || ProjectBrowser::starting_at(requested, total, slides_per_project));

    // Follow route changes that did not come from our own buttons
    use_effect(use_reactive!(|(requested,)| {
        if let Some(b) = browser.write().as_mut() {
            b.select_project(requested);
        }
    }));

    let Some(state) = browser() else {
        return rsx! {
            BackButton { to: Route::GraphicDesign {} }
            p { class: "empty-state", "Nothing to show here yet." }
        };
    };

    let slides = match site.read().subpage_slides(category, state.project_number()) {
        Ok(slides) => slides,
        Err(e) => {
            tracing::error!("No slides for {} project {}: {}", category.slug(), state.project_number(), e);
            return rsx! {
                BackButton { to: Route::GraphicDesign {} }
                p { class: "empty-state", "Nothing to show here yet." }
            };
        }
    };
    let Some(slide) = slides.get(state.slide_index()).cloned() else {
        return rsx! {};
    };

    let even_slide = (state.slide_index() + 1) % 2 == 0;
    let text_order = if even_slide { "order-last" } else { "order-first" };
    let image_order = if even_slide { "order-first" } else { "order-last" };

    rsx! {
        BackButton { to: Route::GraphicDesign {} }
        main { class: "subpage",
            h2 { class: "project-header", "{project_header(state.project_number())}" }

            div { class: "subpage__row",
                div { class: "subpage__text {text_order}",
                    h2 { "{slide.title}" }
                    p { "{slide.description}" }
                }
                div { class: "subpage__media {image_order}",
                    AnimatedImage {
                        key: "{slide.id}",
                        src: slide.thumbnail.clone(),
                        alt: slide.alt_text().to_string(),
                    }
                }
            }

            div { class: "subpage__nav",
                button {
                    class: "modal-nav__btn",
                    "aria-label": "Previous slide",
                    disabled: state.is_first_slide(),
                    onclick: move |_| {
                        browser.with_mut(|b| b.as_mut().map(ProjectBrowser::previous_slide));
                    },
                    "‹"
                }
                span { class: "modal-nav__position",
                    "{state.slide_index() + 1} / {state.slides_per_project()}"
                }
                button {
                    class: "modal-nav__btn",
                    "aria-label": "Next slide",
                    disabled: state.is_last_slide(),
                    onclick: move |_| {
                        browser.with_mut(|b| b.as_mut().map(ProjectBrowser::next_slide));
                    },
                    "›"
                }
            }

            div { class: "subpage__projects",
                button {
                    class: "project-link",
                    disabled: state.is_first_project(),
                    onclick: move |_| step_project(browser, navigator, category, false),
                    "Previous project"
                }
                span { "{state.project_number()} of {state.total_projects()}" }
                button {
                    class: "project-link",
                    disabled: state.is_last_project(),
                    onclick: move |_| step_project(browser, navigator, category, true),
                    "Next project"
                }
            }
        }
    }
}
