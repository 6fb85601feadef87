//! Two-level project browsing
//!
//! The graphic-design subpages page the visitor through numbered projects,
//! each with its own slides. The project position and slide position are
//! two independent [`ClampedCursor`]s. Changing project always starts the
//! new project at its first slide.

use crate::cursor::ClampedCursor;

/// Project-level and slide-level cursors for the subpages flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectBrowser {
    project: ClampedCursor,
    slide: ClampedCursor,
    slides_per_project: usize,
}

impl ProjectBrowser {
    /// Browser over `total_projects` projects of `slides_per_project` slides
    ///
    /// Returns `None` when either count is zero.
    pub fn new(total_projects: usize, slides_per_project: usize) -> Option<Self> {
        Some(Self {
            project: ClampedCursor::new(total_projects)?,
            slide: ClampedCursor::new(slides_per_project)?,
            slides_per_project,
        })
    }

    /// Browser starting at a 1-based project number, clamped into range
    pub fn starting_at(
        project_number: usize,
        total_projects: usize,
        slides_per_project: usize,
    ) -> Option<Self> {
        let mut browser = Self::new(total_projects, slides_per_project)?;
        browser.project = ClampedCursor::clamped(project_number.saturating_sub(1), total_projects)?;
        Some(browser)
    }

    /// Zero-based project index
    pub fn project_index(&self) -> usize {
        self.project.index()
    }

    /// One-based project number, as shown in `Project N`
    pub fn project_number(&self) -> usize {
        self.project.index() + 1
    }

    pub fn total_projects(&self) -> usize {
        self.project.len()
    }

    pub fn slide_index(&self) -> usize {
        self.slide.index()
    }

    pub fn slides_per_project(&self) -> usize {
        self.slides_per_project
    }

    pub fn is_first_project(&self) -> bool {
        self.project.is_at_start()
    }

    pub fn is_last_project(&self) -> bool {
        self.project.is_at_end()
    }

    pub fn is_first_slide(&self) -> bool {
        self.slide.is_at_start()
    }

    pub fn is_last_slide(&self) -> bool {
        self.slide.is_at_end()
    }

    pub fn next_project(&mut self) -> bool {
        let moved = self.project.next();
        if moved {
            self.reset_slide();
        }
        moved
    }

    pub fn previous_project(&mut self) -> bool {
        let moved = self.project.previous();
        if moved {
            self.reset_slide();
        }
        moved
    }

    /// Jump to a 1-based project number; out-of-range numbers are ignored
    pub fn select_project(&mut self, project_number: usize) -> bool {
        let Some(index) = project_number.checked_sub(1) else {
            return false;
        };
        let moved = self.project.jump_to(index);
        if moved {
            self.reset_slide();
        }
        moved
    }

    pub fn next_slide(&mut self) -> bool {
        self.slide.next()
    }

    pub fn previous_slide(&mut self) -> bool {
        self.slide.previous()
    }

    fn reset_slide(&mut self) {
        // slides_per_project is non-zero, so this cannot fail
        if let Some(first) = ClampedCursor::new(self.slides_per_project) {
            self.slide = first;
        }
        tracing::debug!(project = self.project_number(), "Switched project, slide reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counts_rejected() {
        assert!(ProjectBrowser::new(0, 3).is_none());
        assert!(ProjectBrowser::new(3, 0).is_none());
    }

    #[test]
    fn test_starting_at_clamps() {
        let browser = ProjectBrowser::starting_at(9, 5, 3).unwrap();
        assert_eq!(browser.project_number(), 5);
        assert!(browser.is_last_project());

        let browser = ProjectBrowser::starting_at(0, 5, 3).unwrap();
        assert_eq!(browser.project_number(), 1);
    }

    #[test]
    fn test_project_change_resets_slide() {
        let mut browser = ProjectBrowser::new(3, 3).unwrap();
        browser.next_slide();
        browser.next_slide();
        assert_eq!(browser.slide_index(), 2);

        assert!(browser.next_project());
        assert_eq!(browser.project_number(), 2);
        assert_eq!(browser.slide_index(), 0);

        browser.next_slide();
        assert!(browser.previous_project());
        assert_eq!(browser.slide_index(), 0);
    }

    #[test]
    fn test_boundary_project_move_keeps_slide() {
        let mut browser = ProjectBrowser::new(2, 3).unwrap();
        browser.next_slide();
        assert!(!browser.previous_project());
        assert_eq!(browser.slide_index(), 1);
    }

    #[test]
    fn test_select_project() {
        let mut browser = ProjectBrowser::new(5, 2).unwrap();
        browser.next_slide();
        assert!(browser.select_project(4));
        assert_eq!(browser.project_index(), 3);
        assert_eq!(browser.slide_index(), 0);

        browser.next_slide();
        assert!(!browser.select_project(0));
        assert!(!browser.select_project(6));
        assert!(!browser.select_project(4));
        assert_eq!(browser.slide_index(), 1);
    }

    #[test]
    fn test_slide_moves_do_not_touch_project() {
        let mut browser = ProjectBrowser::starting_at(2, 3, 2).unwrap();
        assert!(browser.next_slide());
        assert!(!browser.next_slide());
        assert!(browser.previous_slide());
        assert_eq!(browser.project_number(), 2);
        assert!(browser.is_first_slide());
    }
}
