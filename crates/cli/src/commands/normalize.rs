// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalize command implementation.

use jf_core::{normalize, Input, NormalizeConfig, Normalized};
use serde_json::Value;

use crate::cli::{ContextArgs, OutputFormat};
use crate::config;
use crate::display::format_normalized;
use crate::error::Result;
use crate::input::{unwrap_envelope, Source};

/// Execute the normalize command.
pub fn run(file: Option<String>, output: OutputFormat, context: ContextArgs) -> Result<()> {
    let config = config::resolve(context.config.as_deref(), &context.overrides())?;
    let source = Source::from_arg(file.as_deref());
    tracing::info!("reading {}", source.describe());

    let text = source.read()?;
    let result = normalize_text(&text, &config);
    if result.is_error() {
        tracing::warn!("{} is not valid JSON", source.describe());
    } else {
        tracing::info!("normalized {} issue(s)", result.issues().len());
    }

    println!("{}", render(&result, output)?);
    Ok(())
}

/// Normalizes input text, unwrapping a search response first.
///
/// Text that does not decode is handed to the engine unchanged so it
/// reports the error record.
pub fn normalize_text(text: &str, config: &NormalizeConfig) -> Normalized {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => {
            let value = unwrap_envelope(value);
            normalize(Input::Value(&value), config)
        }
        Err(_) => normalize(Input::Text(text), config),
    }
}

/// Renders a result in the requested format.
pub fn render(result: &Normalized, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(format_normalized(result)),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
