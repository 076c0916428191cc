// SPDX-License-Identifier: MPL-2.0
//! Ordered filter list keyed by source URL.

use super::model::FilterEntry;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Filter rows in appliance order, with no two rows sharing a url.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterList {
    entries: Vec<FilterEntry>,
}

impl FilterList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from a server snapshot.
    ///
    /// Fails with [`Error::DuplicateFilterUrl`] naming the first repeated url.
    pub fn from_entries(entries: Vec<FilterEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.url.as_str()) {
                return Err(Error::DuplicateFilterUrl(entry.url.clone()));
            }
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&FilterEntry> {
        self.entries.iter().find(|entry| entry.url == url)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.get(url).is_some()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FilterEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pages of `page_size` rows; an empty list still has one page.
    #[must_use]
    pub fn page_count(&self, page_size: usize) -> usize {
        let page_size = page_size.max(1);
        self.entries.len().div_ceil(page_size).max(1)
    }

    /// Rows on zero-based `page`, clamped to the last page.
    #[must_use]
    pub fn page(&self, page: usize, page_size: usize) -> &[FilterEntry] {
        let page_size = page_size.max(1);
        let page = page.min(self.page_count(page_size) - 1);
        let start = page * page_size;
        let end = (start + page_size).min(self.entries.len());
        &self.entries[start.min(end)..end]
    }
}
