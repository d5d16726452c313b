// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logged time and original estimate, both stored by the tracker as seconds.

use serde_json::Value;

use crate::issue::LoggedTime;

pub const NO_TIME_LOGGED: &str = "No time logged";
pub const NO_ESTIMATE: &str = "No estimate provided";

/// Reads a seconds value. Fractional values are floored; anything that is
/// not a number counts as absent.
fn seconds(value: Option<&Value>) -> Option<i64> {
    let number = value?.as_number()?;
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.floor() as i64)
    })
}

/// `"{hours}h {minutes}m"` for a seconds value.
pub fn format_hours_minutes(seconds: i64) -> String {
    let hours = seconds.div_euclid(3600);
    let minutes = seconds.rem_euclid(3600) / 60;
    format!("{}h {}m", hours, minutes)
}

fn logged(value: Option<&Value>, absent: &str) -> LoggedTime {
    match seconds(value) {
        Some(s) => LoggedTime {
            seconds: Some(s),
            formatted: format_hours_minutes(s),
        },
        None => LoggedTime {
            seconds: None,
            formatted: absent.to_string(),
        },
    }
}

/// Time logged against the issue (`timespent`).
pub fn time_logged(value: Option<&Value>) -> LoggedTime {
    logged(value, NO_TIME_LOGGED)
}

/// Original estimate (`timeoriginalestimate`).
pub fn estimate(value: Option<&Value>) -> LoggedTime {
    logged(value, NO_ESTIMATE)
}

#[cfg(test)]
#[path = "timelog_tests.rs"]
mod tests;
