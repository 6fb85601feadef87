use dioxus::prelude::*;

use crate::components::Header;
use crate::context::{get_site_config, PageShell};
use crate::pages::{Editing, Fashion, FilmMaking, GraphicDesign, Home, NotFound, Subpages};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Hero, project categories and contact info
/// - `/projects/graphic-design` - Graphic design grid
/// - `/projects/graphic-design/subpages?projectGenre&projectHeader&project` - Numbered project pages
/// - `/projects/editing`, `/projects/fashion`, `/projects/film-making` - Gallery pages with a modal viewer
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/projects/graphic-design")]
        GraphicDesign {},
        #[route("/projects/graphic-design/subpages?:projectGenre&:projectHeader&:project")]
        Subpages { projectGenre: String, projectHeader: String, project: String },
        #[route("/projects/editing")]
        Editing {},
        #[route("/projects/fashion")]
        Fashion {},
        #[route("/projects/film-making")]
        FilmMaking {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, site content, the page shell and routing.
#[component]
pub fn App() -> Element {
    let site = use_signal(get_site_config);
    let shell: Signal<PageShell> = use_signal(PageShell::default);

    use_context_provider(|| site);
    use_context_provider(|| shell);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Header plus the routed page
#[component]
fn SiteLayout() -> Element {
    rsx! {
        Header {}
        div { class: "container",
            Outlet::<Route> {}
        }
    }
}
