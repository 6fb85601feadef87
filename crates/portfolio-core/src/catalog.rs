//! Project catalogs
//!
//! A catalog is the ordered, read-only list of entries for one category.
//! Insertion order is display order and defines next/previous.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::ProjectEntry;

/// Validated, immutable list of project entries
///
/// Cloning is cheap: entries live behind an `Arc` and are shared by every
/// consumer of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCatalog {
    name: Arc<str>,
    entries: Arc<[ProjectEntry]>,
}

impl ProjectCatalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(name: impl Into<String>, entries: Vec<ProjectEntry>) -> PortfolioResult<Self> {
        let name = name.into();
        if entries.is_empty() {
            return Err(PortfolioError::EmptyCatalog(name));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(PortfolioError::DuplicateEntryId {
                    catalog: name,
                    id: entry.id.clone(),
                });
            }
        }

        tracing::debug!(catalog = %name, entries = entries.len(), "Built project catalog");

        Ok(Self {
            name: name.into(),
            entries: entries.into(),
        })
    }

    /// Catalog name (usually the category slug)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for catalogs built through [`ProjectCatalog::new`]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    /// Index of the entry with the given id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

impl<'a> IntoIterator for &'a ProjectCatalog {
    type Item = &'a ProjectEntry;
    type IntoIter = std::slice::Iter<'a, ProjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
