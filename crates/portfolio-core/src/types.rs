//! Core types for Mash Portfolio

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Media attached to a project entry
///
/// Serialized with an explicit `kind` tag so catalog files read as
/// `{ "kind": "remote_video", "url": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRef {
    /// Static image served from the site's assets
    Image { path: String },

    /// Video file served from the site's assets
    LocalVideo { path: String },

    /// Hosted video (currently always a YouTube watch URL)
    RemoteVideo { url: String },
}

impl MediaRef {
    pub fn image(path: impl Into<String>) -> Self {
        MediaRef::Image { path: path.into() }
    }

    pub fn local_video(path: impl Into<String>) -> Self {
        MediaRef::LocalVideo { path: path.into() }
    }

    pub fn remote_video(url: impl Into<String>) -> Self {
        MediaRef::RemoteVideo { url: url.into() }
    }

    /// Short name of the media kind, matching the serialized tag
    pub fn kind(&self) -> &'static str {
        match self {
            MediaRef::Image { .. } => "image",
            MediaRef::LocalVideo { .. } => "local_video",
            MediaRef::RemoteVideo { .. } => "remote_video",
        }
    }

    /// Whether this media plays audio/video and needs stopping on close
    pub fn is_video(&self) -> bool {
        !matches!(self, MediaRef::Image { .. })
    }
}

/// A single project shown in a category grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Stable key, unique within a catalog
    pub id: String,
    /// Display name
    pub title: String,
    /// Text shown alongside the media (may contain simple markup)
    #[serde(default)]
    pub description: String,
    /// What plays when the entry is opened
    pub media: MediaRef,
    /// Image shown in the grid before selection
    pub thumbnail: String,
    /// Accessible text for the thumbnail; falls back to the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ProjectEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        media: MediaRef,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            media,
            thumbnail: thumbnail.into(),
            alt: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Alt text to render for the thumbnail
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or(&self.title)
    }
}

/// Top-level project categories of the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    GraphicDesign,
    Editing,
    Fashion,
    FilmMaking,
}

impl Category {
    /// All categories in navigation order
    pub const ALL: [Category; 4] = [
        Category::GraphicDesign,
        Category::Editing,
        Category::Fashion,
        Category::FilmMaking,
    ];

    /// URL slug used in routes and asset folders
    pub fn slug(&self) -> &'static str {
        match self {
            Category::GraphicDesign => "graphic-design",
            Category::Editing => "editing",
            Category::Fashion => "fashion",
            Category::FilmMaking => "film-making",
        }
    }

    /// Human-readable name for headings and menus
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::GraphicDesign => "Graphic Design",
            Category::Editing => "Editing",
            Category::Fashion => "Fashion",
            Category::FilmMaking => "Film Making",
        }
    }

    /// Parse a route slug into a category
    pub fn from_slug(slug: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == slug.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_slug(s).ok_or_else(|| PortfolioError::UnknownCategory(s.to_string()))
    }
}
