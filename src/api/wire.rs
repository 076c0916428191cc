// SPDX-License-Identifier: MPL-2.0
//! JSON bodies of the appliance's `/control/filtering/*` endpoints.

use crate::filtering::{FilterEntry, FilterPatch, FilteringStatus};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub interval: u32,
    /// The appliance sends `null` rather than `[]` when nothing is subscribed.
    #[serde(default)]
    pub filters: Option<Vec<FilterJson>>,
    #[serde(default)]
    pub user_rules: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct FilterJson {
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rules_count: u64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddUrlRequest<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RemoveUrlRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SetUrlRequest<'a> {
    pub url: &'a str,
    pub data: SetUrlData<'a>,
}

#[derive(Debug, Serialize)]
pub struct SetUrlData<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub enabled: bool,
}

impl<'a> SetUrlRequest<'a> {
    pub fn new(url: &'a str, patch: &'a FilterPatch) -> Self {
        Self {
            url,
            data: SetUrlData {
                name: &patch.name,
                url: &patch.url,
                enabled: patch.enabled,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub updated: u32,
}

/// Parses `last_updated`; Go's zero time means "never downloaded".
fn parse_last_updated(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw?).ok()?.with_timezone(&Utc);
    (parsed.year() > 1).then_some(parsed)
}

impl From<FilterJson> for FilterEntry {
    fn from(json: FilterJson) -> Self {
        let last_updated = parse_last_updated(json.last_updated.as_deref());
        Self {
            url: json.url,
            name: json.name,
            enabled: json.enabled,
            rules_count: json.rules_count,
            last_updated,
        }
    }
}

impl From<StatusResponse> for FilteringStatus {
    fn from(response: StatusResponse) -> Self {
        Self {
            enabled: response.enabled,
            interval: response.interval,
            filters: response
                .filters
                .unwrap_or_default()
                .into_iter()
                .map(FilterEntry::from)
                .collect(),
            user_rules: response.user_rules.unwrap_or_default().join("\n"),
        }
    }
}
