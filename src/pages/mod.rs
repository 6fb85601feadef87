//! Page components for Mash Portfolio.

mod category_gallery;
mod editing;
mod fashion;
mod film_making;
mod graphic_design;
mod home;
mod not_found;
mod subpages;

pub use category_gallery::CategoryGallery;
pub use editing::Editing;
pub use fashion::Fashion;
pub use film_making::FilmMaking;
pub use graphic_design::GraphicDesign;
pub use home::Home;
pub use not_found::NotFound;
pub use subpages::Subpages;
