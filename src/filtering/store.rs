// SPDX-License-Identifier: MPL-2.0
//! The single owner of filtering state.
//!
//! Views read through the accessors and never mutate rows directly. Network
//! work goes through a two-step protocol: [`FilteringState::begin`] marks the
//! intent as in flight (or refuses a duplicate), and
//! [`FilteringState::apply`] folds the matching [`Outcome`] back in and tells
//! the caller what to do next.

use super::intent::{FilteringStatus, Intent, Outcome};
use super::list::FilterList;
use super::model::{get_filter, ModalFilterData, ModalKind, ModalType};
use crate::error::Error;
use std::collections::HashSet;

/// In-flight markers, one per affordance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Processing {
    /// Status fetch (list loading).
    pub filters: bool,
    pub add: bool,
    pub remove: bool,
    pub refresh: bool,
    pub rules: bool,
    /// Urls whose enable toggle or edit is awaiting the appliance.
    config: HashSet<String>,
    /// A mutation finished while the status fetch was running; fetch again
    /// once it returns.
    refetch_queued: bool,
}

impl Processing {
    /// Whether `url` has a toggle or edit in flight.
    #[must_use]
    pub fn is_configuring(&self, url: &str) -> bool {
        self.config.contains(url)
    }
}

/// Dialog visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Modal {
    #[default]
    Closed,
    Open(ModalKind),
}

/// User-facing feedback produced by an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Silent,
    Success(&'static str),
    /// Refresh finished; carries the number of re-downloaded lists.
    Refreshed(u32),
    Failure { action: &'static str, error: Error },
}

/// What the caller should do after [`FilteringState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    /// Re-run the status fetch; mutations do not return the new list.
    pub refetch: bool,
    pub notice: Notice,
}

impl Reaction {
    fn silent() -> Self {
        Self {
            refetch: false,
            notice: Notice::Silent,
        }
    }

    fn refetch(notice: Notice) -> Self {
        Self {
            refetch: true,
            notice,
        }
    }

    fn failed(action: &'static str, error: Error) -> Self {
        Self {
            refetch: false,
            notice: Notice::Failure { action, error },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilteringState {
    enabled: bool,
    interval: u32,
    user_rules: String,
    filters: FilterList,
    modal: Modal,
    is_filter_added: bool,
    processing: Processing,
}

impl FilteringState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn filters(&self) -> &FilterList {
        &self.filters
    }

    #[must_use]
    pub fn user_rules(&self) -> &str {
        &self.user_rules
    }

    /// Whether DNS filtering is switched on at the appliance.
    #[must_use]
    pub fn filtering_enabled(&self) -> bool {
        self.enabled
    }

    /// Filter update interval in hours.
    #[must_use]
    pub fn update_interval(&self) -> u32 {
        self.interval
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, Modal::Open(_))
    }

    /// Dialog mode; a closed dialog reports `Add`.
    #[must_use]
    pub fn modal_type(&self) -> ModalType {
        match &self.modal {
            Modal::Open(kind) => kind.modal_type(),
            Modal::Closed => ModalType::Add,
        }
    }

    /// Url being edited, when the dialog is open in edit mode.
    #[must_use]
    pub fn modal_filter_url(&self) -> Option<&str> {
        match &self.modal {
            Modal::Open(ModalKind::Edit { url }) => Some(url),
            _ => None,
        }
    }

    /// Data that seeds the dialog for the current mode.
    #[must_use]
    pub fn current_filter_data(&self) -> ModalFilterData {
        match self.modal_filter_url() {
            Some(url) => get_filter(url, self.filters.as_slice()),
            None => ModalFilterData::default(),
        }
    }

    #[must_use]
    pub fn is_filter_added(&self) -> bool {
        self.is_filter_added
    }

    #[must_use]
    pub fn processing(&self) -> &Processing {
        &self.processing
    }

    /// Table-wide busy indicator.
    ///
    /// Row toggles are left out; they only disable their own checkbox.
    #[must_use]
    pub fn table_loading(&self) -> bool {
        let p = &self.processing;
        p.filters || p.add || p.remove || p.refresh
    }

    #[must_use]
    pub fn is_toggling(&self, url: &str) -> bool {
        self.processing.is_configuring(url)
    }

    // =========================================================================
    // Local state operations
    // =========================================================================

    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Modal::Open(kind);
        self.is_filter_added = false;
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.is_filter_added = false;
    }

    /// Opens the dialog in `kind` mode, or closes it when already open.
    pub fn toggle_modal(&mut self, kind: ModalKind) {
        if self.is_modal_open() {
            self.close_modal();
        } else {
            self.open_modal(kind);
        }
    }

    /// Replaces the rule text being edited.
    pub fn set_user_rules(&mut self, rules: String) {
        self.user_rules = rules;
    }

    // =========================================================================
    // Intent lifecycle
    // =========================================================================

    /// Marks `intent` as in flight.
    ///
    /// Returns `false` without changing anything when the same work is
    /// already running.
    pub fn begin(&mut self, intent: &Intent) -> bool {
        let p = &mut self.processing;
        let flag = match intent {
            Intent::FetchStatus => &mut p.filters,
            Intent::AddFilter { .. } => &mut p.add,
            Intent::RemoveFilter { .. } => &mut p.remove,
            Intent::RefreshFilters => &mut p.refresh,
            Intent::SetRules(_) => &mut p.rules,
            Intent::ToggleFilter { url, .. } | Intent::EditFilter { url, .. } => {
                return p.config.insert(url.clone());
            }
        };
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    /// Asks for the status fetch that follows a successful mutation.
    ///
    /// Returns `true` when the caller should dispatch it now. While a fetch
    /// is already running its answer may predate the mutation, so the
    /// request is queued and comes back as that fetch's [`Reaction::refetch`].
    pub fn request_refetch(&mut self) -> bool {
        if self.processing.filters {
            self.processing.refetch_queued = true;
            return false;
        }
        true
    }

    /// Clears the in-flight marker for `outcome` and folds its result in.
    pub fn apply(&mut self, outcome: Outcome) -> Reaction {
        match outcome {
            Outcome::StatusFetched(result) => {
                self.processing.filters = false;
                let queued = std::mem::take(&mut self.processing.refetch_queued);
                let mut reaction = match result.and_then(|status| self.replace_status(status)) {
                    Ok(()) => Reaction::silent(),
                    Err(error) => Reaction::failed("fetch-status", error),
                };
                reaction.refetch = queued;
                reaction
            }
            Outcome::FilterToggled { url, result } => {
                self.processing.config.remove(&url);
                match result {
                    Ok(()) => Reaction::refetch(Notice::Silent),
                    Err(error) => Reaction::failed("toggle-filter", error),
                }
            }
            Outcome::FilterAdded(result) => {
                self.processing.add = false;
                match result {
                    Ok(()) => {
                        self.is_filter_added = true;
                        Reaction::refetch(Notice::Success("notification-filter-added"))
                    }
                    Err(error) => Reaction::failed("add-filter", error),
                }
            }
            Outcome::FilterEdited { url, result } => {
                self.processing.config.remove(&url);
                match result {
                    Ok(()) => {
                        if self.modal_filter_url() == Some(url.as_str()) {
                            self.close_modal();
                        }
                        Reaction::refetch(Notice::Success("notification-filter-updated"))
                    }
                    Err(error) => Reaction::failed("edit-filter", error),
                }
            }
            Outcome::FilterRemoved { url, result } => {
                self.processing.remove = false;
                match result {
                    Ok(()) => {
                        if self.modal_filter_url() == Some(url.as_str()) {
                            self.close_modal();
                        }
                        Reaction::refetch(Notice::Success("notification-filter-removed"))
                    }
                    Err(error) => Reaction::failed("remove-filter", error),
                }
            }
            Outcome::FiltersRefreshed(result) => {
                self.processing.refresh = false;
                match result {
                    Ok(updated) => Reaction::refetch(Notice::Refreshed(updated)),
                    Err(error) => Reaction::failed("refresh-filters", error),
                }
            }
            Outcome::RulesSaved(result) => {
                self.processing.rules = false;
                match result {
                    Ok(()) => Reaction {
                        refetch: false,
                        notice: Notice::Success("notification-rules-saved"),
                    },
                    Err(error) => Reaction::failed("set-rules", error),
                }
            }
        }
    }

    fn replace_status(&mut self, status: FilteringStatus) -> crate::error::Result<()> {
        self.filters = FilterList::from_entries(status.filters)?;
        self.enabled = status.enabled;
        self.interval = status.interval;
        self.user_rules = status.user_rules;
        Ok(())
    }
}
