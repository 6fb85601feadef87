//! Route parameters for the subpages flow
//!
//! `/projects/graphic-design/subpages?projectGenre=…&projectHeader=Project%203&project=…`
//!
//! The project ordinal travels as the display label `Project N`. Parsing
//! that label into a validated number is kept apart from formatting it.

use crate::types::Category;

const PROJECT_HEADER_PREFIX: &str = "Project";

/// Extract the 1-based project number from a `Project N` header
///
/// Missing or malformed headers default to 1. The result is clamped to
/// `[1, total_projects]`; with no projects at all it is 1.
pub fn parse_project_number(header: Option<&str>, total_projects: usize) -> usize {
    let parsed = header.and_then(project_number_from_header).unwrap_or_else(|| {
        tracing::trace!(?header, "Project header missing or malformed, using 1");
        1
    });
    parsed.clamp(1, total_projects.max(1))
}

fn project_number_from_header(header: &str) -> Option<usize> {
    let rest = header.trim().strip_prefix(PROJECT_HEADER_PREFIX)?;
    // Require a separator so "Project3x" or "Projects 3" do not match
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Display label for a 1-based project number
pub fn project_header(project_number: usize) -> String {
    format!("{PROJECT_HEADER_PREFIX} {project_number}")
}

/// Query parameters carried by a subpages link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubpageQuery {
    /// Category slug (`graphic-design`)
    pub project_genre: String,
    /// `Project N` label
    pub project_header: String,
    /// Category key; redundant with the genre in current links
    pub project: String,
}

impl SubpageQuery {
    /// Query that opens project `project_number` of `category`
    pub fn for_project(category: Category, project_number: usize) -> Self {
        Self {
            project_genre: category.slug().to_string(),
            project_header: project_header(project_number),
            project: category.slug().to_string(),
        }
    }

    /// Category named by the query, falling back to the `project` key
    pub fn category(&self) -> Option<Category> {
        Category::from_slug(&self.project_genre).or_else(|| Category::from_slug(&self.project))
    }

    /// Validated 1-based project number
    pub fn project_number(&self, total_projects: usize) -> usize {
        let header = Some(self.project_header.as_str()).filter(|h| !h.trim().is_empty());
        parse_project_number(header, total_projects)
    }
}
