// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Custom fields whose ids vary per tracker instance.

use serde_json::{Map, Number, Value};

use crate::extract::{is_truthy, scalar_text, text_or_empty};

/// The shapes a sprint field takes in practice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SprintField<'a> {
    Absent,
    /// Sprint history, oldest first; entries are strings or sprint objects.
    History(&'a [Value]),
    /// A single sprint object.
    Sprint(&'a Map<String, Value>),
    /// A string or other scalar.
    Scalar(&'a Value),
}

impl<'a> SprintField<'a> {
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => SprintField::Absent,
            Some(Value::Array(entries)) => SprintField::History(entries),
            Some(Value::Object(sprint)) => SprintField::Sprint(sprint),
            Some(scalar) => SprintField::Scalar(scalar),
        }
    }

    /// Name of the current sprint.
    ///
    /// For a history the last entry wins: it is the most recent sprint the
    /// issue was carried into.
    pub fn current(&self) -> Option<String> {
        match self {
            SprintField::Absent => None,
            SprintField::History(entries) => entries.last().and_then(sprint_entry_name),
            SprintField::Sprint(sprint) => sprint_name(sprint),
            SprintField::Scalar(value) => Some(scalar_text(value)),
        }
    }
}

fn sprint_name(sprint: &Map<String, Value>) -> Option<String> {
    sprint.get("name").filter(|v| !v.is_null()).map(scalar_text)
}

fn sprint_entry_name(entry: &Value) -> Option<String> {
    match entry {
        Value::Null => None,
        Value::Object(sprint) => sprint_name(sprint),
        other => Some(scalar_text(other)),
    }
}

/// Current sprint name, or `None`.
pub fn sprint(value: Option<&Value>) -> Option<String> {
    SprintField::classify(value).current()
}

/// Epic key, present only when the field holds a truthy value.
pub fn epic_link(value: Option<&Value>) -> Option<String> {
    value
        .filter(|v| is_truthy(v))
        .map(|v| text_or_empty(Some(v)))
}

/// Story point estimate, when the field holds a number.
pub fn story_points(value: Option<&Value>) -> Option<Number> {
    value.and_then(Value::as_number).cloned()
}

#[cfg(test)]
#[path = "custom_tests.rs"]
mod tests;
