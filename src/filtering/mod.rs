// SPDX-License-Identifier: MPL-2.0
//! Filtering domain: filter list rows, the state owner, and the typed
//! intents/outcomes exchanged with the appliance.
//!
//! Nothing in here talks to the network or renders widgets. The
//! [`api`](crate::api) module turns an [`Intent`] into an [`Outcome`], and the
//! [`blocklist`](crate::ui::blocklist) view reads [`FilteringState`].

mod intent;
mod list;
mod model;
mod store;

pub use intent::{FilteringStatus, Intent, Outcome};
pub use list::FilterList;
pub use model::{get_filter, FilterEntry, FilterPatch, ModalFilterData, ModalKind, ModalType};
pub use store::{FilteringState, Notice, Processing, Reaction};

#[cfg(test)]
pub(crate) use model::entry as test_entry;
