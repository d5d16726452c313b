// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the JSON Schema of `normalize --output json`.

use jf_core::Normalized;
use schemars::schema_for;

use crate::error::Result;

/// Run the schema command.
pub fn run() -> Result<()> {
    println!("{}", schema_json()?);
    Ok(())
}

pub fn schema_json() -> Result<String> {
    let schema = schema_for!(Normalized);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
