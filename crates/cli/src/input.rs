// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading already-fetched tracker responses.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use serde_json::Value;

use crate::error::{Error, Result};

/// Where raw issue JSON is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `None` and `-` mean stdin; anything else is a file path.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }

    /// Reads the whole input as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadInput`] for an unreadable file and
    /// [`Error::EmptyInput`] when the input carries nothing but whitespace.
    pub fn read(&self) -> Result<String> {
        let text = match self {
            Source::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                text
            }
            Source::File(path) => fs::read_to_string(path).map_err(|source| Error::ReadInput {
                path: path.display().to_string(),
                source,
            })?,
        };
        if text.trim().is_empty() {
            return Err(Error::EmptyInput {
                input: self.describe(),
            });
        }
        Ok(text)
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Stdin => "stdin".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Returns the `issues` array of a search response, or the value unchanged.
///
/// A search response is an object carrying an `issues` array and no
/// `fields` of its own, so a raw issue is never mistaken for one.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if !map.contains_key("fields")
                && map.get("issues").is_some_and(Value::is_array) =>
        {
            map.remove("issues").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
