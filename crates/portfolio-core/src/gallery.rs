//! Gallery modal state machine
//!
//! One controller per category page. It owns the "which entry is open"
//! selection and reports page-level effects through [`ShellSignal`]s.
//!
//! ## State Machine
//!
//! ```text
//! ┌────────┐   open(i)    ┌─────────┐
//! │ Closed │ ───────────► │ Open(i) │ ──┐ next()     → Open(min(i+1, len-1))
//! └────────┘ ◄─────────── └─────────┘ ◄─┘ previous() → Open(max(i-1, 0))
//!              close()
//! ```
//!
//! Closed → Open queues `BackgroundSuppressed(true)`.
//! Open → Closed queues `StopPlayback` then `BackgroundSuppressed(false)`.

use std::collections::VecDeque;

use crate::catalog::ProjectCatalog;
use crate::cursor::ClampedCursor;
use crate::media::{resolve_media, PlaybackDescriptor};
use crate::types::ProjectEntry;

/// Effect the page shell must apply after a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSignal {
    /// Dim the grid and disable pointer events under the modal (or undo it)
    BackgroundSuppressed(bool),
    /// Unmount the playback surface so audio does not keep running
    StopPlayback,
}

/// Currently selected entry; `None` while the modal is closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GallerySelection {
    cursor: Option<ClampedCursor>,
}

impl GallerySelection {
    pub fn active_index(&self) -> Option<usize> {
        self.cursor.map(|cursor| cursor.index())
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }
}

/// Controller mediating between a catalog and a single open-item view
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryModalController {
    catalog: ProjectCatalog,
    selection: GallerySelection,
    signals: VecDeque<ShellSignal>,
}

impl GalleryModalController {
    /// Create a closed controller over `catalog`
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            selection: GallerySelection::default(),
            signals: VecDeque::new(),
        }
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> GallerySelection {
        self.selection
    }

    pub fn active_index(&self) -> Option<usize> {
        self.selection.active_index()
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    /// Open the entry at `index`
    ///
    /// Out-of-range indices are ignored and leave the state untouched.
    /// Returns whether the modal now shows `index`.
    pub fn open(&mut self, index: usize) -> bool {
        let Some(cursor) = ClampedCursor::at(index, self.catalog.len()) else {
            tracing::debug!(
                catalog = %self.catalog.name(),
                index,
                len = self.catalog.len(),
                "Ignoring out-of-range open request"
            );
            return false;
        };

        let was_open = self.is_open();
        self.selection.cursor = Some(cursor);
        tracing::debug!(catalog = %self.catalog.name(), index, "Gallery opened");

        if !was_open {
            self.signals.push_back(ShellSignal::BackgroundSuppressed(true));
        }
        true
    }

    /// Open the entry with the given id; unknown ids are ignored
    pub fn open_by_id(&mut self, id: &str) -> bool {
        match self.catalog.position_of(id) {
            Some(index) => self.open(index),
            None => {
                tracing::debug!(catalog = %self.catalog.name(), id, "Ignoring open for unknown id");
                false
            }
        }
    }

    /// Close the modal; closing twice is harmless
    pub fn close(&mut self) {
        if self.selection.cursor.take().is_some() {
            tracing::debug!(catalog = %self.catalog.name(), "Gallery closed");
            self.signals.push_back(ShellSignal::StopPlayback);
            self.signals.push_back(ShellSignal::BackgroundSuppressed(false));
        }
    }

    /// Advance to the next entry; returns whether the selection moved
    pub fn next(&mut self) -> bool {
        let moved = self.selection.cursor.as_mut().is_some_and(ClampedCursor::next);
        if moved {
            tracing::trace!(index = ?self.active_index(), "Gallery advanced");
        }
        moved
    }

    /// Step back to the previous entry; returns whether the selection moved
    pub fn previous(&mut self) -> bool {
        let moved = self
            .selection
            .cursor
            .as_mut()
            .is_some_and(ClampedCursor::previous);
        if moved {
            tracing::trace!(index = ?self.active_index(), "Gallery stepped back");
        }
        moved
    }

    /// True when there is nothing before the current entry (or when closed)
    pub fn is_at_start(&self) -> bool {
        self.selection.cursor.map_or(true, |cursor| cursor.is_at_start())
    }

    /// True when there is nothing after the current entry (or when closed)
    pub fn is_at_end(&self) -> bool {
        self.selection.cursor.map_or(true, |cursor| cursor.is_at_end())
    }

    /// Entry currently on display
    pub fn current_entry(&self) -> Option<&ProjectEntry> {
        self.active_index().and_then(|index| self.catalog.get(index))
    }

    /// Playback descriptor for the open entry; `None` when closed
    pub fn current_descriptor(&self) -> Option<PlaybackDescriptor> {
        self.current_entry().map(resolve_media)
    }

    /// Hand over all queued shell signals, oldest first
    pub fn drain_signals(&mut self) -> Vec<ShellSignal> {
        self.signals.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaRef;

    fn catalog(len: usize) -> ProjectCatalog {
        let entries = (0..len)
            .map(|i| {
                let path = format!("/slide-{}.avif", i);
                ProjectEntry::new(format!("slide-{}", i), format!("Slide {}", i), MediaRef::image(&path), path)
            })
            .collect();
        ProjectCatalog::new("slides", entries).unwrap()
    }

    #[test]
    fn test_starts_closed() {
        let gallery = GalleryModalController::new(catalog(3));
        assert!(!gallery.is_open());
        assert_eq!(gallery.active_index(), None);
        assert!(gallery.current_descriptor().is_none());
        assert!(gallery.is_at_start());
        assert!(gallery.is_at_end());
    }

    #[test]
    fn test_open_and_descriptor() {
        let mut gallery = GalleryModalController::new(catalog(3));
        assert!(gallery.open(1));
        assert_eq!(gallery.active_index(), Some(1));
        assert_eq!(
            gallery.current_descriptor(),
            Some(PlaybackDescriptor::Image {
                src: "/slide-1.avif".to_string()
            })
        );
    }

    #[test]
    fn test_open_out_of_range_is_noop() {
        let mut gallery = GalleryModalController::new(catalog(3));
        assert!(!gallery.open(3));
        assert!(!gallery.is_open());

        gallery.open(2);
        assert!(!gallery.open(7));
        assert_eq!(gallery.active_index(), Some(2));
    }

    #[test]
    fn test_next_and_previous_clamp() {
        let mut gallery = GalleryModalController::new(catalog(3));
        gallery.open(1);
        assert!(gallery.next());
        assert!(gallery.is_at_end());
        assert!(!gallery.next());
        assert_eq!(gallery.active_index(), Some(2));

        assert!(gallery.previous());
        assert!(gallery.previous());
        assert!(gallery.is_at_start());
        assert!(!gallery.previous());
        assert_eq!(gallery.active_index(), Some(0));
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let mut gallery = GalleryModalController::new(catalog(3));
        assert!(!gallery.next());
        assert!(!gallery.previous());
        assert!(!gallery.is_open());
        assert!(gallery.drain_signals().is_empty());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut gallery = GalleryModalController::new(catalog(2));
        gallery.open(0);
        gallery.close();
        gallery.close();
        assert!(!gallery.is_open());
        assert!(gallery.current_descriptor().is_none());
    }

    #[test]
    fn test_signals_on_open_close() {
        let mut gallery = GalleryModalController::new(catalog(3));
        gallery.open(0);
        assert_eq!(gallery.drain_signals(), vec![ShellSignal::BackgroundSuppressed(true)]);

        gallery.next();
        gallery.open(2);
        assert!(gallery.drain_signals().is_empty());

        gallery.close();
        assert_eq!(
            gallery.drain_signals(),
            vec![ShellSignal::StopPlayback, ShellSignal::BackgroundSuppressed(false)]
        );

        gallery.close();
        assert!(gallery.drain_signals().is_empty());
    }

    #[test]
    fn test_open_by_id() {
        let mut gallery = GalleryModalController::new(catalog(3));
        assert!(gallery.open_by_id("slide-2"));
        assert_eq!(gallery.active_index(), Some(2));
        assert!(!gallery.open_by_id("missing"));
        assert_eq!(gallery.active_index(), Some(2));
    }
}
