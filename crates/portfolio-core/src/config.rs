//! Site configuration
//!
//! Everything the pages display comes from a [`SiteConfig`]: owner
//! details, per-category intro text, and the catalogs themselves.
//! `SiteConfig::default()` is the published portfolio; a JSON file with the
//! same shape can override any part of it (missing fields keep defaults).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::ProjectCatalog;
use crate::error::{PortfolioError, PortfolioResult};
use crate::media::video_path_for_thumbnail;
use crate::types::{Category, MediaRef, ProjectEntry};

const LOREM: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. Impedit, eos rem alias totam assumenda quis deleniti facilis porro atque provident vitae aperiam placeat tenetur consectetur id explicabo odio est expedita?";

/// How to reach the portfolio owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub instagram: String,
}

/// One category page: intro paragraphs plus its ordered entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub category: Category,
    #[serde(default)]
    pub intro: Vec<String>,
    pub entries: Vec<ProjectEntry>,
}

/// Static site content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Owner name shown in the hero
    pub name: String,
    /// Line under the name ("DESIGNER - ARTIST")
    pub tagline: String,
    /// Paragraph in the Info section
    pub about: String,
    pub contact: Contact,
    pub sections: Vec<SectionConfig>,
    /// Slides shown for each graphic-design subpage project
    pub subpage_slides: usize,
    /// Body text under each subpage slide title
    pub subpage_body: String,
}

impl SiteConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> PortfolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading site config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON (useful as a starting point for overrides)
    pub fn to_json_pretty(&self) -> PortfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every catalog and the subpage settings
    pub fn validate(&self) -> PortfolioResult<()> {
        for category in Category::ALL {
            self.catalog(category)?;
        }
        if self.subpage_slides == 0 {
            return Err(PortfolioError::Config(
                "subpage_slides must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Section settings for a category
    pub fn section(&self, category: Category) -> Option<&SectionConfig> {
        self.sections.iter().find(|section| section.category == category)
    }

    /// Intro paragraphs for a category page
    pub fn intro(&self, category: Category) -> &[String] {
        self.section(category)
            .map(|section| section.intro.as_slice())
            .unwrap_or(&[])
    }

    /// Validated catalog for a category
    pub fn catalog(&self, category: Category) -> PortfolioResult<ProjectCatalog> {
        let section = self.section(category).ok_or_else(|| {
            PortfolioError::Config(format!("no section configured for '{}'", category.slug()))
        })?;
        ProjectCatalog::new(category.slug(), section.entries.clone())
    }

    /// Slides for one subpage project of `category`
    ///
    /// Slides follow the asset layout `/{slug}/{slug}-{k}.avif`.
    pub fn subpage_slides(&self, category: Category, project_number: usize) -> PortfolioResult<ProjectCatalog> {
        let slug = category.slug();
        let entries = (1..=self.subpage_slides)
            .map(|k| {
                let path = format!("/{slug}/{slug}-{k}.avif");
                ProjectEntry::new(
                    format!("{slug}-project-{project_number}-slide-{k}"),
                    format!("Project Info {k}"),
                    MediaRef::image(&path),
                    path,
                )
                .with_description(self.subpage_body.clone())
                .with_alt(format!("Project Image {k}"))
            })
            .collect();
        ProjectCatalog::new(format!("{slug}-project-{project_number}"), entries)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "MOHAMMAD MASHOUKA".to_string(),
            tagline: "DESIGNER - ARTIST".to_string(),
            about: "A jack of all trades in design and art, based in Amman, Jordan. I am available for design collaborations and projects. Reach out to discuss your creative needs.".to_string(),
            contact: Contact {
                email: "mohammadmashouka@gmail.com".to_string(),
                phone: "+962792944744".to_string(),
                instagram: "https://www.instagram.com/mohammadmashoukaa/".to_string(),
            },
            sections: vec![
                graphic_design_section(),
                editing_section(),
                fashion_section(),
                film_making_section(),
            ],
            subpage_slides: 3,
            subpage_body: LOREM.to_string(),
        }
    }
}

fn local_video_entry(id: &str, title: &str, thumbnail: &str, description: &str, alt: &str) -> ProjectEntry {
    ProjectEntry::new(
        id,
        title,
        MediaRef::local_video(video_path_for_thumbnail(thumbnail)),
        thumbnail,
    )
    .with_description(description)
    .with_alt(alt)
}

fn graphic_design_section() -> SectionConfig {
    let entries = (1..=5)
        .map(|n| {
            let path = format!("/graphic-design/graphic-design-{n}.avif");
            ProjectEntry::new(
                format!("graphic-design-{n}"),
                format!("Project {n}"),
                MediaRef::image(&path),
                path,
            )
            .with_alt(format!("Graphic Design Example {n}"))
        })
        .collect();

    SectionConfig {
        category: Category::GraphicDesign,
        intro: Vec::new(),
        entries,
    }
}

fn editing_section() -> SectionConfig {
    SectionConfig {
        category: Category::Editing,
        intro: vec![
            "Editing is my specialty, what makes me stand outside of other editors is that my niche is the psychology of editing and understanding of social media algorithms, I know how to get the numbers through various psychological ways of the viewers attention and with the understanding of the algorithms I have accomplished more than 1,000,000+ views for multiple clients.".to_string(),
        ],
        entries: vec![
            local_video_entry(
                "ash-meppers",
                "Ash Meppers",
                "/editing/editing-1.avif",
                "This page is the work on Youtube and TikTok for a client named Ash Meppers.",
                "Screenshot of Ash Meppers' YouTube page",
            ),
            ProjectEntry::new(
                "studio-jumhoor",
                "StudioJumhoor",
                MediaRef::remote_video("https://www.youtube.com/watch?v=Ix8wp2Ks6Fk"),
                "/editing/editing-2.avif",
            )
            .with_description("Editing for a sports studio called StudioJumhoor on Youtube.")
            .with_alt("Image of StudioJumhoor on YouTube"),
            local_video_entry(
                "john-sims",
                "JohnSims_",
                "/editing/editing-3.avif",
                "TikTok and Youtube edits for a client called JohnSims_.",
                "Image of Fifa player",
            ),
            local_video_entry(
                "mazaya-new-years",
                "Mazaya New Years",
                "/editing/editing-4.avif",
                "Edit for Mazayas New Years campaign.",
                "Edit for Mazaya's New Years campaign.",
            ),
        ],
    }
}

fn fashion_section() -> SectionConfig {
    let entries = (1..=6)
        .map(|n| {
            let path = format!("/fashion/fashion-{n}.avif");
            ProjectEntry::new(
                format!("fashion-{n}"),
                format!("Fashion piece {n}"),
                MediaRef::image(&path),
                path,
            )
            .with_alt(format!("Image of fashion piece {n}"))
        })
        .collect();

    SectionConfig {
        category: Category::Fashion,
        intro: vec![
            "My participation of a fashion show where every designer was meant to capture the essence of a country, my designs were to capture the essence of Egypt through the daily used demotic hieroglyphics for the men attire.".to_string(),
            "As for the woman I captured the glory of the most powerful woman in history Kleopatra in a modern business outfit that shows power.".to_string(),
        ],
        entries,
    }
}

fn film_making_section() -> SectionConfig {
    SectionConfig {
        category: Category::FilmMaking,
        intro: Vec::new(),
        entries: vec![
            local_video_entry(
                "crown-prince-foundation",
                "Crown Prince Foundation",
                "/filmmaking/film-making-1.avif",
                "An advertisement for the Crown Prince Foundation where I was assistant producer.",
                "Picture of the Palestinian flag",
            ),
            ProjectEntry::new(
                "dana-salah",
                "Dana Salah",
                MediaRef::remote_video("https://www.youtube.com/watch?v=iftQMSMMb0w"),
                "/filmmaking/film-making-3.avif",
            )
            .with_description("Art department for Dana Salah music video")
            .with_alt("Dana Salah"),
            local_video_entry(
                "ingot-brokers",
                "Ingot Brokers",
                "/filmmaking/film-making-2.avif",
                "An advertisement for Ingot brokers with Raphael Varane where I was assistant producer.",
                "Picture of a canyon",
            ),
            local_video_entry(
                "mazaya",
                "Mazaya",
                "/filmmaking/film-making-4.avif",
                "Assistant Producer and extra for Mazaya",
                "Picture of shisha guys",
            ),
            local_video_entry(
                "world-cup-campaign",
                "World Cup Campaign",
                "/filmmaking/film-making-5.avif",
                "World Cup campaign.",
                "Picture of Girl with French celebrations",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{resolve_media, PlaybackDescriptor};

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        config.validate().unwrap();

        assert_eq!(config.catalog(Category::GraphicDesign).unwrap().len(), 5);
        assert_eq!(config.catalog(Category::Editing).unwrap().len(), 4);
        assert_eq!(config.catalog(Category::Fashion).unwrap().len(), 6);
        assert_eq!(config.catalog(Category::FilmMaking).unwrap().len(), 5);
    }

    #[test]
    fn test_default_film_entries_resolve() {
        let catalog = SiteConfig::default().catalog(Category::FilmMaking).unwrap();

        let first = resolve_media(catalog.get(0).unwrap());
        assert_eq!(
            first,
            PlaybackDescriptor::Video {
                src: "/filmmaking/film-making-1.mp4".to_string(),
                autoplay: true,
                loop_playback: true,
            }
        );

        let dana = resolve_media(catalog.get(1).unwrap());
        assert_eq!(dana.render_as(), "iframe");
    }

    #[test]
    fn test_intro_lookup() {
        let config = SiteConfig::default();
        assert_eq!(config.intro(Category::Fashion).len(), 2);
        assert!(config.intro(Category::FilmMaking).is_empty());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json_str(r#"{ "tagline": "ARTIST" }"#).unwrap();
        assert_eq!(config.tagline, "ARTIST");
        assert_eq!(config.name, "MOHAMMAD MASHOUKA");
        assert_eq!(config.sections.len(), 4);
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let err = SiteConfig::from_json_str(r#"{ "sections": [] }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn test_empty_section_is_rejected() {
        let json = r#"{ "sections": [
            { "category": "graphic-design", "entries": [] }
        ] }"#;
        let err = SiteConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, PortfolioError::EmptyCatalog(name) if name == "graphic-design"));
    }

    #[test]
    fn test_zero_subpage_slides_rejected() {
        let err = SiteConfig::from_json_str(r#"{ "subpage_slides": 0 }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn test_subpage_slides_layout() {
        let config = SiteConfig::default();
        let slides = config.subpage_slides(Category::GraphicDesign, 2).unwrap();
        assert_eq!(slides.len(), 3);

        let second = slides.get(1).unwrap();
        assert_eq!(second.title, "Project Info 2");
        assert_eq!(second.thumbnail, "/graphic-design/graphic-design-2.avif");
        assert_eq!(slides.name(), "graphic-design-project-2");
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SiteConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(SiteConfig::from_json_str(&json).unwrap(), config);
    }
}
