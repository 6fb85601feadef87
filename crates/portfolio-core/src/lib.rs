//! Mash Portfolio Core Library
//!
//! Framework-free building blocks for the portfolio site: project catalogs,
//! media resolution, and the gallery modal state machine.
//!
//! ## Overview
//!
//! Every category page (graphic design, editing, fashion, film-making) shows
//! a grid of projects. Selecting one opens a modal that plays the project's
//! media and lets the visitor page through the rest of the catalog. The
//! logic behind that modal lives here so each page only has to wire it up.
//!
//! ## Core Pieces
//!
//! - **ProjectCatalog**: validated, ordered, read-only list of entries
//! - **GalleryModalController**: Closed/Open(i) state with clamped navigation
//! - **PlaybackDescriptor**: one renderable shape for images, local videos
//!   and YouTube links
//! - **ProjectBrowser**: independent project and slide cursors for the
//!   subpages flow
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{Category, GalleryModalController, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let catalog = config.catalog(Category::FilmMaking).unwrap();
//! let mut gallery = GalleryModalController::new(catalog);
//!
//! assert!(gallery.open(0));
//! assert!(gallery.current_descriptor().is_some());
//! gallery.close();
//! assert!(gallery.current_descriptor().is_none());
//! ```

pub mod browser;
pub mod catalog;
pub mod config;
pub mod cursor;
pub mod error;
pub mod gallery;
pub mod media;
pub mod route;
pub mod types;

// Re-exports
pub use browser::ProjectBrowser;
pub use catalog::ProjectCatalog;
pub use config::{Contact, SiteConfig};
pub use cursor::ClampedCursor;
pub use error::{PortfolioError, PortfolioResult};
pub use gallery::{GalleryModalController, ShellSignal};
pub use media::{resolve_media, video_path_for_thumbnail, youtube_video_id, PlaybackDescriptor};
pub use route::{parse_project_number, project_header, SubpageQuery};
pub use types::*;
