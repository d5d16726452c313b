// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jf-core operations.
//!
//! Normalization itself never fails: missing or malformed fields resolve to
//! documented defaults. These errors cover configuration and serialization.

use thiserror::Error;

/// All possible errors that can occur in jf-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("custom field id for {field} cannot be empty\n  hint: ids look like 'customfield_10014'")]
    EmptyFieldId { field: &'static str },

    #[error("invalid base URL: '{0}'\n  hint: the base URL must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for jf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
