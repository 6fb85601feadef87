//! Property-based tests for gallery navigation
//!
//! Uses proptest to verify the clamped navigation invariants of
//! GalleryModalController and ProjectBrowser.

use portfolio_core::{
    resolve_media, GalleryModalController, MediaRef, ProjectBrowser, ProjectCatalog, ProjectEntry,
    ShellSignal,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Build a catalog of `len` image entries
fn catalog(len: usize) -> ProjectCatalog {
    let entries = (0..len)
        .map(|i| {
            let path = format!("/gallery/item-{}.avif", i);
            ProjectEntry::new(format!("item-{}", i), format!("Item {}", i), MediaRef::image(&path), path)
        })
        .collect();
    ProjectCatalog::new("gallery", entries).expect("non-empty catalog")
}

/// Generate a catalog length together with a valid index into it
fn len_and_index() -> impl Strategy<Value = (usize, usize)> {
    (1..40usize).prop_flat_map(|len| (Just(len), 0..len))
}

/// Operations a visitor can trigger on the modal
#[derive(Debug, Clone)]
enum GalleryOp {
    Open(usize),
    Close,
    Next,
    Previous,
}

fn gallery_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<GalleryOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..60usize).prop_map(GalleryOp::Open),
            1 => Just(GalleryOp::Close),
            3 => Just(GalleryOp::Next),
            3 => Just(GalleryOp::Previous),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Opening any valid index shows that entry's media
    #[test]
    fn open_shows_selected_entry((len, i) in len_and_index()) {
        let catalog = catalog(len);
        let mut gallery = GalleryModalController::new(catalog.clone());

        prop_assert!(gallery.open(i));
        let expected = resolve_media(catalog.get(i).unwrap());
        prop_assert_eq!(gallery.current_descriptor(), Some(expected));
    }

    /// Out-of-range opens leave the state exactly as it was
    #[test]
    fn open_out_of_range_keeps_state(
        (len, i) in len_and_index(),
        overshoot in 0..100usize,
        start_open in any::<bool>(),
    ) {
        let mut gallery = GalleryModalController::new(catalog(len));
        if start_open {
            gallery.open(i);
        }
        let before = gallery.active_index();

        prop_assert!(!gallery.open(len + overshoot));
        prop_assert_eq!(gallery.active_index(), before);
    }

    /// next() reaches the last entry after len-1-i steps, then stays there
    #[test]
    fn next_reaches_end_then_stops((len, i) in len_and_index(), extra in 0..10usize) {
        let mut gallery = GalleryModalController::new(catalog(len));
        gallery.open(i);

        for _ in 0..(len - 1 - i) {
            prop_assert!(gallery.next());
        }
        prop_assert_eq!(gallery.active_index(), Some(len - 1));
        prop_assert!(gallery.is_at_end());

        for _ in 0..extra {
            prop_assert!(!gallery.next());
        }
        prop_assert_eq!(gallery.active_index(), Some(len - 1));
    }

    /// previous() reaches the first entry after i steps, then stays there
    #[test]
    fn previous_reaches_start_then_stops((len, i) in len_and_index(), extra in 0..10usize) {
        let mut gallery = GalleryModalController::new(catalog(len));
        gallery.open(i);

        for _ in 0..i {
            prop_assert!(gallery.previous());
        }
        prop_assert_eq!(gallery.active_index(), Some(0));
        prop_assert!(gallery.is_at_start());

        for _ in 0..extra {
            prop_assert!(!gallery.previous());
        }
        prop_assert_eq!(gallery.active_index(), Some(0));
    }

    /// next() then previous() returns to the start position away from the end
    #[test]
    fn next_previous_roundtrip((len, i) in len_and_index()) {
        prop_assume!(i + 1 < len);
        let mut gallery = GalleryModalController::new(catalog(len));
        gallery.open(i);
        gallery.next();
        gallery.previous();
        prop_assert_eq!(gallery.active_index(), Some(i));
    }

    /// Whatever happened before, close() ends in Closed with no descriptor
    #[test]
    fn close_always_closes(len in 1..20usize, ops in gallery_ops_strategy(30)) {
        let mut gallery = GalleryModalController::new(catalog(len));
        for op in ops {
            match op {
                GalleryOp::Open(i) => { gallery.open(i); }
                GalleryOp::Close => gallery.close(),
                GalleryOp::Next => { gallery.next(); }
                GalleryOp::Previous => { gallery.previous(); }
            }
        }
        gallery.close();
        prop_assert!(!gallery.is_open());
        prop_assert!(gallery.current_descriptor().is_none());
    }

    /// The active index never leaves [0, len) under any operation sequence
    #[test]
    fn index_stays_in_bounds(len in 1..20usize, ops in gallery_ops_strategy(50)) {
        let mut gallery = GalleryModalController::new(catalog(len));
        for op in ops {
            match op {
                GalleryOp::Open(i) => { gallery.open(i); }
                GalleryOp::Close => gallery.close(),
                GalleryOp::Next => { gallery.next(); }
                GalleryOp::Previous => { gallery.previous(); }
            }
            if let Some(index) = gallery.active_index() {
                prop_assert!(index < len);
            }
        }
    }

    /// Background suppression signals alternate and match the open state
    #[test]
    fn shell_signals_track_open_state(len in 1..10usize, ops in gallery_ops_strategy(40)) {
        let mut gallery = GalleryModalController::new(catalog(len));
        let mut suppressed = false;

        for op in ops {
            match op {
                GalleryOp::Open(i) => { gallery.open(i); }
                GalleryOp::Close => gallery.close(),
                GalleryOp::Next => { gallery.next(); }
                GalleryOp::Previous => { gallery.previous(); }
            }
            for signal in gallery.drain_signals() {
                if let ShellSignal::BackgroundSuppressed(value) = signal {
                    prop_assert_ne!(value, suppressed, "suppression must toggle");
                    suppressed = value;
                }
            }
            prop_assert_eq!(suppressed, gallery.is_open());
        }
    }

    /// Changing project always lands on the first slide
    #[test]
    fn project_change_resets_slide(
        projects in 1..10usize,
        slides in 1..6usize,
        slide_steps in 0..6usize,
        forward in any::<bool>(),
    ) {
        let mut browser = ProjectBrowser::new(projects, slides).unwrap();
        if !forward {
            browser.select_project(projects);
        }
        for _ in 0..slide_steps {
            browser.next_slide();
        }
        let slide_before = browser.slide_index();

        let moved = if forward { browser.next_project() } else { browser.previous_project() };
        if moved {
            prop_assert_eq!(browser.slide_index(), 0);
        } else {
            prop_assert_eq!(browser.slide_index(), slide_before);
        }
    }
}
