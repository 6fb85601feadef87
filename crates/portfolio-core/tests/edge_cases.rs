//! Edge case and boundary condition tests
//!
//! These tests exercise malformed media, route parameters, and
//! configuration files the way the site loads them at startup.

use std::io::Write;

use portfolio_core::{
    parse_project_number, resolve_media, Category, GalleryModalController, MediaRef,
    PlaybackDescriptor, PortfolioError, ProjectBrowser, ProjectCatalog, ProjectEntry, ShellSignal,
    SiteConfig, SubpageQuery,
};

fn remote(url: &str) -> ProjectEntry {
    ProjectEntry::new("remote", "Remote", MediaRef::remote_video(url), "/thumb.avif")
}

// ============================================================================
// Media Resolution
// ============================================================================

#[test]
fn test_documented_media_scenarios() {
    let image = ProjectEntry::new("a", "A", MediaRef::image("/a.avif"), "/a.avif");
    assert_eq!(
        resolve_media(&image),
        PlaybackDescriptor::Image {
            src: "/a.avif".to_string()
        }
    );

    let video = ProjectEntry::new("b", "B", MediaRef::local_video("/a.mp4"), "/a.avif");
    assert_eq!(
        resolve_media(&video),
        PlaybackDescriptor::Video {
            src: "/a.mp4".to_string(),
            autoplay: true,
            loop_playback: true,
        }
    );

    assert_eq!(
        resolve_media(&remote("https://www.youtube.com/watch?v=Ix8wp2Ks6Fk")),
        PlaybackDescriptor::Iframe {
            embed_url: "https://www.youtube.com/embed/Ix8wp2Ks6Fk?autoplay=1&controls=1&loop=1&playlist=Ix8wp2Ks6Fk".to_string()
        }
    );

    assert_eq!(resolve_media(&remote("https://youtu.be/xyz")), PlaybackDescriptor::None);
}

#[test]
fn test_malformed_remote_urls_degrade() {
    for url in ["", "youtube", "https://", "https://www.youtube.com/watch", "::::"] {
        assert_eq!(resolve_media(&remote(url)), PlaybackDescriptor::None, "url: {url:?}");
    }
}

#[test]
fn test_gallery_with_unplayable_entry_still_navigates() {
    let catalog = ProjectCatalog::new(
        "mixed",
        vec![
            remote("https://youtu.be/xyz"),
            ProjectEntry::new("ok", "Ok", MediaRef::image("/ok.avif"), "/ok.avif"),
        ],
    )
    .unwrap();
    let mut gallery = GalleryModalController::new(catalog);

    gallery.open(0);
    assert_eq!(gallery.current_descriptor(), Some(PlaybackDescriptor::None));
    assert!(gallery.next());
    assert_eq!(gallery.current_descriptor().map(|d| d.render_as()), Some("image"));
}

// ============================================================================
// Modal Lifecycle
// ============================================================================

#[test]
fn test_close_while_playing_requests_stop() {
    let catalog = SiteConfig::default().catalog(Category::Editing).unwrap();
    let mut gallery = GalleryModalController::new(catalog);

    gallery.open_by_id("studio-jumhoor");
    assert_eq!(gallery.current_descriptor().map(|d| d.render_as()), Some("iframe"));
    gallery.drain_signals();

    gallery.close();
    let signals = gallery.drain_signals();
    assert_eq!(signals.first(), Some(&ShellSignal::StopPlayback));
    assert_eq!(signals.last(), Some(&ShellSignal::BackgroundSuppressed(false)));
}

#[test]
fn test_single_entry_catalog() {
    let catalog = ProjectCatalog::new(
        "one",
        vec![ProjectEntry::new("only", "Only", MediaRef::image("/only.avif"), "/only.avif")],
    )
    .unwrap();
    let mut gallery = GalleryModalController::new(catalog);

    gallery.open(0);
    assert!(gallery.is_at_start());
    assert!(gallery.is_at_end());
    assert!(!gallery.next());
    assert!(!gallery.previous());
}

// ============================================================================
// Route Parameters
// ============================================================================

#[test]
fn test_project_header_parsing() {
    assert_eq!(parse_project_number(Some("Project 3"), 5), 3);
    assert_eq!(parse_project_number(None, 5), 1);
    assert_eq!(parse_project_number(Some("Project 12"), 5), 5);
}

#[test]
fn test_subpage_query_drives_browser() {
    let query = SubpageQuery {
        project_genre: "graphic-design".to_string(),
        project_header: "Project 4".to_string(),
        project: "5".to_string(),
    };
    let category = query.category().unwrap();
    let total = SiteConfig::default().catalog(category).unwrap().len();

    let browser = ProjectBrowser::starting_at(query.project_number(total), total, 3).unwrap();
    assert_eq!(browser.project_number(), 4);
    assert_eq!(browser.slide_index(), 0);
}

// ============================================================================
// Configuration Files
// ============================================================================

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = SiteConfig::default().to_json_pretty().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = SiteConfig::load(file.path()).unwrap();
    assert_eq!(loaded, SiteConfig::default());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PortfolioError::Io(_)));
}

#[test]
fn test_load_malformed_json_is_serialization_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ \"name\": ").unwrap();

    let err = SiteConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, PortfolioError::Serialization(_)));
}

#[test]
fn test_duplicate_ids_in_config_rejected() {
    let mut config = SiteConfig::default();
    let fashion = config
        .sections
        .iter_mut()
        .find(|s| s.category == Category::Fashion)
        .unwrap();
    let first = fashion.entries[0].clone();
    fashion.entries.push(first);

    let err = config.validate().unwrap_err();
    assert!(matches!(err, PortfolioError::DuplicateEntryId { ref id, .. } if id == "fashion-1"));
}
