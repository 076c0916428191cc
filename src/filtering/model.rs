// SPDX-License-Identifier: MPL-2.0
//! Filter list rows and the values exchanged with the filter dialog.

use chrono::{DateTime, Utc};

/// One subscribed filter list as reported by the appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    /// Source URL; unique within a [`FilterList`](super::FilterList).
    pub url: String,
    pub name: String,
    pub enabled: bool,
    pub rules_count: u64,
    /// `None` until the appliance has downloaded the list once.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Fields sent to the appliance when a filter is edited or toggled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPatch {
    pub name: String,
    pub url: String,
    pub enabled: bool,
}

impl FilterPatch {
    /// Patch that flips `entry.enabled` and keeps name and url.
    #[must_use]
    pub fn toggled(entry: &FilterEntry) -> Self {
        Self {
            name: entry.name.clone(),
            url: entry.url.clone(),
            enabled: !entry.enabled,
        }
    }
}

/// Projection of a row used to seed the edit dialog.
///
/// The default value (`name` and `url` empty, no `enabled`) is what the
/// dialog shows when the edited url is no longer in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalFilterData {
    pub enabled: Option<bool>,
    pub name: String,
    pub url: String,
}

impl From<&FilterEntry> for ModalFilterData {
    fn from(entry: &FilterEntry) -> Self {
        Self {
            enabled: Some(entry.enabled),
            name: entry.name.clone(),
            url: entry.url.clone(),
        }
    }
}

/// Which submit behavior the filter dialog uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalType {
    Add,
    Edit,
}

/// Dialog mode together with the data it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    Add,
    Edit { url: String },
}

impl ModalKind {
    #[must_use]
    pub fn modal_type(&self) -> ModalType {
        match self {
            ModalKind::Add => ModalType::Add,
            ModalKind::Edit { .. } => ModalType::Edit,
        }
    }
}

/// Looks up `url` in `filters` and projects the hit for the edit dialog.
///
/// Returns the empty [`ModalFilterData`] when nothing matches, so the dialog
/// opens blank instead of failing.
#[must_use]
pub fn get_filter(url: &str, filters: &[FilterEntry]) -> ModalFilterData {
    filters
        .iter()
        .find(|entry| entry.url == url)
        .map(ModalFilterData::from)
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) fn entry(url: &str, name: &str, enabled: bool) -> FilterEntry {
    FilterEntry {
        url: url.to_string(),
        name: name.to_string(),
        enabled,
        rules_count: 0,
        last_updated: None,
    }
}
