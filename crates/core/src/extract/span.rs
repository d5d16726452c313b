// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Elapsed-time metrics between two resolved dates.

use crate::extract::date::{DateResolution, Timestamp};
use crate::issue::{StatusDuration, WorkDuration};

/// Spans shorter than this many days carry hour and minute detail.
const DETAIL_THRESHOLD_DAYS: i64 = 30;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Whole days plus the hour/minute remainder of a time span.
///
/// Days are floored, so a negative span of one hour is `-1` days and
/// `23` hours, matching how the tracker's own tooling reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Span {
    /// Span from `start` to `end`.
    pub fn between(start: Timestamp, end: Timestamp) -> Self {
        let seconds = (end - start).num_milliseconds().div_euclid(1000);
        Span::from_seconds(seconds)
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Span {
            days: seconds.div_euclid(SECONDS_PER_DAY),
            hours: seconds.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: seconds.rem_euclid(SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        }
    }

    /// `"D days, H hours, M minutes"` under the threshold, `"D days"` at or
    /// above it.
    pub fn formatted(&self) -> String {
        if self.days < DETAIL_THRESHOLD_DAYS {
            format!(
                "{} days, {} hours, {} minutes",
                self.days, self.hours, self.minutes
            )
        } else {
            format!("{} days", self.days)
        }
    }
}

/// Time from creation to last update. Always present; `days` is null when
/// either date is unresolved.
pub fn work_duration(created: DateResolution, updated: DateResolution) -> WorkDuration {
    match (created.timestamp(), updated.timestamp()) {
        (Some(start), Some(end)) => {
            let span = Span::between(start, end);
            WorkDuration {
                days: Some(span.days),
                formatted: span.formatted(),
            }
        }
        _ => WorkDuration {
            days: None,
            formatted: "Unknown".to_string(),
        },
    }
}

/// Time since the last status change. Absent when either date is
/// unresolved.
pub fn time_in_status(
    status_changed: DateResolution,
    updated: DateResolution,
) -> Option<StatusDuration> {
    let start = status_changed.timestamp()?;
    let end = updated.timestamp()?;
    let span = Span::between(start, end);
    Some(StatusDuration {
        days: span.days,
        formatted: span.formatted(),
    })
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
