// SPDX-License-Identifier: MPL-2.0
//! Requests the console can make of the appliance and their completions.

use super::model::{FilterEntry, FilterPatch};
use crate::error::{Error, Result};

/// Snapshot returned by the appliance's filtering status call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteringStatus {
    /// Whether DNS filtering is active on the appliance.
    pub enabled: bool,
    /// Filter list update interval in hours.
    pub interval: u32,
    pub filters: Vec<FilterEntry>,
    /// User rules, one rule per line.
    pub user_rules: String,
}

/// A mutation or query to run against the appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    FetchStatus,
    ToggleFilter { url: String, patch: FilterPatch },
    AddFilter { url: String, name: String },
    EditFilter { url: String, patch: FilterPatch },
    RemoveFilter { url: String },
    RefreshFilters,
    SetRules(String),
}

impl Intent {
    /// Short name used in logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Intent::FetchStatus => "fetch-status",
            Intent::ToggleFilter { .. } => "toggle-filter",
            Intent::AddFilter { .. } => "add-filter",
            Intent::EditFilter { .. } => "edit-filter",
            Intent::RemoveFilter { .. } => "remove-filter",
            Intent::RefreshFilters => "refresh-filters",
            Intent::SetRules(_) => "set-rules",
        }
    }

    /// The outcome of this intent when it could not be sent at all.
    #[must_use]
    pub fn failed(self, error: Error) -> Outcome {
        match self {
            Intent::FetchStatus => Outcome::StatusFetched(Err(error)),
            Intent::ToggleFilter { url, .. } => Outcome::FilterToggled {
                url,
                result: Err(error),
            },
            Intent::AddFilter { .. } => Outcome::FilterAdded(Err(error)),
            Intent::EditFilter { url, .. } => Outcome::FilterEdited {
                url,
                result: Err(error),
            },
            Intent::RemoveFilter { url } => Outcome::FilterRemoved {
                url,
                result: Err(error),
            },
            Intent::RefreshFilters => Outcome::FiltersRefreshed(Err(error)),
            Intent::SetRules(_) => Outcome::RulesSaved(Err(error)),
        }
    }
}

/// Completion of an [`Intent`], carrying the appliance's answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    StatusFetched(Result<FilteringStatus>),
    FilterToggled { url: String, result: Result<()> },
    FilterAdded(Result<()>),
    FilterEdited { url: String, result: Result<()> },
    FilterRemoved { url: String, result: Result<()> },
    /// Number of lists the appliance re-downloaded.
    FiltersRefreshed(Result<u32>),
    RulesSaved(Result<()>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_keeps_row_url() {
        let outcome = Intent::RemoveFilter {
            url: "https://a.example".into(),
        }
        .failed(Error::Config("no server".into()));

        assert_eq!(
            outcome,
            Outcome::FilterRemoved {
                url: "https://a.example".into(),
                result: Err(Error::Config("no server".into())),
            }
        );
    }

    #[test]
    fn labels_name_the_request() {
        assert_eq!(Intent::FetchStatus.label(), "fetch-status");
        assert_eq!(Intent::SetRules(String::new()).label(), "set-rules");
    }
}
