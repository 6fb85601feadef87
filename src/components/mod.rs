//! UI Components for Mash Portfolio.

mod animated_image;
mod back_button;
mod gallery_modal;
mod header;
mod playback_surface;
mod project_card;

pub use animated_image::AnimatedImage;
pub use back_button::BackButton;
pub use gallery_modal::GalleryModal;
pub use header::{category_route, scroll_to_anchor, Header, INFO_ANCHOR};
pub use playback_surface::PlaybackSurface;
pub use project_card::ProjectCard;
