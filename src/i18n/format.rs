// SPDX-License-Identifier: MPL-2.0
//! Locale-aware formatting for numbers and timestamps shown in tables.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;
use unic_langid::LanguageIdentifier;

/// Group separator placed between thousands for the locale's language.
fn group_separator(locale: &LanguageIdentifier) -> &'static str {
    match locale.language.as_str() {
        "fr" => "\u{202f}",
        "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" => ".",
        "ru" | "pl" | "cs" | "sk" | "uk" | "sv" | "fi" | "nb" | "no" => "\u{a0}",
        _ => ",",
    }
}

/// Formats a count with the locale's thousands separator, e.g. `1,234,567`.
pub fn format_count(value: u64, locale: &LanguageIdentifier) -> String {
    let digits = value.to_string();
    let separator = group_separator(locale);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

fn detailed_pattern(locale: &LanguageIdentifier) -> &'static str {
    match (locale.language.as_str(), locale.region.as_ref().map(|r| r.as_str())) {
        ("en", Some("US")) | ("en", None) => "%m/%d/%Y, %H:%M:%S",
        ("en", _) => "%d/%m/%Y, %H:%M:%S",
        ("de", _) => "%d.%m.%Y, %H:%M:%S",
        ("ja" | "zh" | "ko", _) => "%Y/%m/%d %H:%M:%S",
        _ => "%d/%m/%Y %H:%M:%S",
    }
}

/// Formats a timestamp with date and 24-hour time in the given time zone.
pub fn format_detailed_datetime_in<Tz>(
    value: &DateTime<Utc>,
    tz: &Tz,
    locale: &LanguageIdentifier,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value
        .with_timezone(tz)
        .format(detailed_pattern(locale))
        .to_string()
}

/// Formats a timestamp with date and 24-hour time in the local time zone.
pub fn format_detailed_datetime(value: &DateTime<Utc>, locale: &LanguageIdentifier) -> String {
    format_detailed_datetime_in(value, &Local, locale)
}
