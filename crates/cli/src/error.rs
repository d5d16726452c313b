// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the jflat CLI.
///
/// Malformed issue JSON is not among them: the engine reports it as an
/// error record on stdout. These cover the host around the engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no input: {input} is empty\n  hint: pass a file path or pipe a tracker response into jflat")]
    EmptyInput { input: String },

    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("config error in {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("{0}")]
    Core(#[from] jf_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// A specialized Result type for jflat operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
