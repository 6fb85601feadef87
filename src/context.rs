//! Context providers for Mash Portfolio.
//!
//! Provides the site content, the page shell, and the gallery hook to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a category page
//! let gallery = use_gallery(catalog);
//! gallery.open(2);
//!
//! // Anywhere below App
//! let shell = use_page_shell();
//! if shell().background_suppressed { /* dim */ }
//! ```

use dioxus::prelude::*;
use portfolio_core::{GalleryModalController, ProjectCatalog, ShellSignal, SiteConfig};

/// Get the site content loaded at startup.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Hook to access the site content from context.
pub fn use_site_config() -> Signal<SiteConfig> {
    use_context::<Signal<SiteConfig>>()
}

/// Page-level visual state driven by gallery shell signals.
///
/// The shell never inspects gallery state directly; it only applies the
/// signals a controller emits on open/close transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageShell {
    /// Dim the page and disable pointer events behind an open modal
    pub background_suppressed: bool,
    /// Bumped on every stop request; playback surfaces key on it to remount
    pub playback_generation: u64,
    /// Home section to scroll to once the home page has mounted
    pub pending_anchor: Option<&'static str>,
}

impl PageShell {
    /// Apply one shell signal
    pub fn apply(&mut self, signal: ShellSignal) {
        match signal {
            ShellSignal::BackgroundSuppressed(suppressed) => {
                self.background_suppressed = suppressed;
            }
            ShellSignal::StopPlayback => {
                self.playback_generation = self.playback_generation.wrapping_add(1);
            }
        }
    }

    /// Apply signals in the order the controller emitted them
    pub fn apply_all(&mut self, signals: impl IntoIterator<Item = ShellSignal>) {
        for signal in signals {
            self.apply(signal);
        }
    }

    /// Remember a section to scroll to after navigating home
    pub fn request_anchor(&mut self, anchor: &'static str) {
        self.pending_anchor = Some(anchor);
    }

    /// Consume the pending section, if any
    pub fn take_anchor(&mut self) -> Option<&'static str> {
        self.pending_anchor.take()
    }

    /// Restore interactivity, e.g. when a page unmounts with its modal open
    pub fn release(&mut self) {
        self.apply(ShellSignal::StopPlayback);
        self.background_suppressed = false;
    }
}

/// Hook to access the page shell from context.
pub fn use_page_shell() -> Signal<PageShell> {
    use_context::<Signal<PageShell>>()
}

/// Gallery controller bound to the page shell.
///
/// Every operation runs on the controller and forwards the resulting shell
/// signals, so pages never touch the shell themselves.
#[derive(Clone, Copy, PartialEq)]
pub struct GalleryHandle {
    controller: Signal<GalleryModalController>,
    shell: Signal<PageShell>,
}

impl GalleryHandle {
    fn run<R>(mut self, op: impl FnOnce(&mut GalleryModalController) -> R) -> R {
        let (result, signals) = {
            let mut controller = self.controller.write();
            let result = op(&mut controller);
            (result, controller.drain_signals())
        };

        if !signals.is_empty() {
            self.shell.write().apply_all(signals);
        }
        result
    }

    pub fn open(self, index: usize) -> bool {
        self.run(|gallery| gallery.open(index))
    }

    pub fn close(self) {
        self.run(GalleryModalController::close)
    }

    pub fn next(self) -> bool {
        self.run(GalleryModalController::next)
    }

    pub fn previous(self) -> bool {
        self.run(GalleryModalController::previous)
    }

    /// Inspect the controller (subscribes the caller to changes)
    pub fn with<R>(&self, f: impl FnOnce(&GalleryModalController) -> R) -> R {
        self.controller.with(f)
    }

    pub fn shell(&self) -> PageShell {
        (self.shell)()
    }
}

/// Hook creating a gallery controller for `catalog`.
///
/// The controller starts closed. If the page unmounts while the modal is
/// open, the shell is released so the next page is not left dimmed.
pub fn use_gallery(catalog: ProjectCatalog) -> GalleryHandle {
    let controller = use_signal(move || GalleryModalController::new(catalog));
    let mut shell = use_page_shell();

    use_drop(move || {
        if shell.peek().background_suppressed {
            shell.write().release();
        }
    });

    GalleryHandle { controller, shell }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{MediaRef, ProjectEntry};

    fn controller() -> GalleryModalController {
        let entries = vec![
            ProjectEntry::new("a", "A", MediaRef::local_video("/a.mp4"), "/a.avif"),
            ProjectEntry::new("b", "B", MediaRef::image("/b.avif"), "/b.avif"),
        ];
        GalleryModalController::new(ProjectCatalog::new("test", entries).unwrap())
    }

    #[test]
    fn test_stop_playback_bumps_generation() {
        let mut shell = PageShell::default();
        shell.apply(ShellSignal::StopPlayback);
        shell.apply(ShellSignal::StopPlayback);
        assert_eq!(shell.playback_generation, 2);
        assert!(!shell.background_suppressed);
    }

    #[test]
    fn test_background_suppressed_sets_flag() {
        let mut shell = PageShell::default();
        shell.apply(ShellSignal::BackgroundSuppressed(true));
        assert!(shell.background_suppressed);
        shell.apply(ShellSignal::BackgroundSuppressed(false));
        assert!(!shell.background_suppressed);
        assert_eq!(shell.playback_generation, 0);
    }

    #[test]
    fn test_release_clears_suppression_and_stops_playback() {
        let mut shell = PageShell {
            background_suppressed: true,
            playback_generation: 7,
            pending_anchor: None,
        };
        shell.release();
        assert!(!shell.background_suppressed);
        assert_eq!(shell.playback_generation, 8);
    }

    #[test]
    fn test_open_then_close_restores_page_and_stops_playback() {
        let mut gallery = controller();
        let mut shell = PageShell::default();

        assert!(gallery.open(0));
        shell.apply_all(gallery.drain_signals());
        assert!(shell.background_suppressed);
        assert_eq!(shell.playback_generation, 0);

        gallery.next();
        shell.apply_all(gallery.drain_signals());
        assert!(shell.background_suppressed);

        gallery.close();
        shell.apply_all(gallery.drain_signals());
        assert!(!shell.background_suppressed);
        assert_eq!(shell.playback_generation, 1);

        // A second close is a no-op
        gallery.close();
        shell.apply_all(gallery.drain_signals());
        assert_eq!(shell.playback_generation, 1);
    }

    #[test]
    fn test_pending_anchor_is_consumed_once() {
        let mut shell = PageShell::default();
        assert_eq!(shell.take_anchor(), None);
        shell.request_anchor("info");
        assert_eq!(shell.take_anchor(), Some("info"));
        assert_eq!(shell.take_anchor(), None);
    }
}
