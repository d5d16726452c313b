// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date resolution with a fixed fallback chain.
//!
//! The tracker emits timestamps like `2024-01-15T10:30:00.000+0000`, but
//! older fields and some custom fields carry `2024-01-15T10:30:00+0000` or a
//! bare `2024-01-15`. Layouts are tried in that order and the first that
//! parses wins. A `Z` suffix counts as a zero offset.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::Value;

/// A parsed instant with its original UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Output format for resolved dates.
const OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// The timestamp layouts the tracker is known to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `2024-01-15T10:30:00.123+0000`
    FractionalOffset,
    /// `2024-01-15T10:30:00+0000`
    Offset,
    /// `2024-01-15`, read as midnight UTC.
    CalendarDate,
}

/// Parse order. The first layout that accepts the input wins.
pub const LAYOUTS: [DateLayout; 3] = [
    DateLayout::FractionalOffset,
    DateLayout::Offset,
    DateLayout::CalendarDate,
];

/// Rewrites a trailing UTC designator `Z` as `+0000`, which `%z` accepts.
fn zulu_to_offset(s: &str) -> Cow<'_, str> {
    match s.strip_suffix('Z') {
        Some(rest) => Cow::Owned(format!("{rest}+0000")),
        None => Cow::Borrowed(s),
    }
}

impl DateLayout {
    fn pattern(self) -> &'static str {
        match self {
            DateLayout::FractionalOffset => "%Y-%m-%dT%H:%M:%S%.f%z",
            DateLayout::Offset => "%Y-%m-%dT%H:%M:%S%z",
            DateLayout::CalendarDate => "%Y-%m-%d",
        }
    }

    /// Attempts to parse `s` in exactly this layout.
    pub fn parse(self, s: &str) -> Option<Timestamp> {
        match self {
            // chrono treats `%.f` as optional, so require the fraction here
            DateLayout::FractionalOffset if !s.contains('.') => None,
            DateLayout::FractionalOffset | DateLayout::Offset => {
                DateTime::parse_from_str(&zulu_to_offset(s), self.pattern()).ok()
            }
            DateLayout::CalendarDate => NaiveDate::parse_from_str(s, self.pattern())
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc().fixed_offset()),
        }
    }
}

/// Outcome of resolving a date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateResolution {
    Resolved(Timestamp),
    Unresolved,
}

impl DateResolution {
    /// The parsed instant, if any.
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            DateResolution::Resolved(ts) => Some(*ts),
            DateResolution::Unresolved => None,
        }
    }

    /// `YYYY-MM-DD` in the timestamp's own offset, or `fallback`.
    pub fn format_or(&self, fallback: &str) -> String {
        match self {
            DateResolution::Resolved(ts) => ts.format(OUTPUT_FORMAT).to_string(),
            DateResolution::Unresolved => fallback.to_string(),
        }
    }
}

/// Parses a timestamp string against [`LAYOUTS`] in order.
pub fn parse_timestamp(s: &str) -> DateResolution {
    LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(s))
        .map_or(DateResolution::Unresolved, DateResolution::Resolved)
}

/// Resolves an optional raw field value to a date.
///
/// Absent, null, empty and non-string values are unresolved, as are strings
/// no layout accepts.
pub fn resolve_date(value: Option<&Value>) -> DateResolution {
    match value {
        Some(Value::String(s)) if !s.is_empty() => {
            let resolution = parse_timestamp(s);
            if resolution == DateResolution::Unresolved {
                tracing::debug!("unrecognized date format: {:?}", s);
            }
            resolution
        }
        Some(Value::Null) | None => DateResolution::Unresolved,
        Some(Value::String(_)) => DateResolution::Unresolved,
        Some(other) => {
            tracing::debug!("date field is not a string: {}", other);
            DateResolution::Unresolved
        }
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
