// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Description flattening.
//!
//! Older API versions return the description as a plain string; newer ones
//! return a rich-text document (`{"type": "doc", "content": [...]}`) whose
//! blocks are paragraphs, code blocks, lists and so on. Only paragraphs and
//! code blocks contribute text.

use serde_json::Value;

/// The shapes a description field takes in practice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Description<'a> {
    Absent,
    Plain(&'a str),
    /// Top-level block nodes of a rich-text document.
    Document(&'a [Value]),
    /// Anything else; rendered as JSON text.
    Other(&'a Value),
}

impl<'a> Description<'a> {
    /// Sorts a raw description value into one of the known shapes.
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Description::Absent,
            Some(Value::String(s)) => Description::Plain(s),
            Some(doc) if doc.get("type").and_then(Value::as_str) == Some("doc") => {
                Description::Document(
                    doc.get("content")
                        .and_then(Value::as_array)
                        .map(Vec::as_slice)
                        .unwrap_or_default(),
                )
            }
            Some(other) => Description::Other(other),
        }
    }

    /// Flattens the description to text.
    pub fn to_text(&self) -> String {
        match self {
            Description::Absent => String::new(),
            Description::Plain(s) => (*s).to_string(),
            Description::Document(blocks) => blocks
                .iter()
                .filter_map(render_block)
                .collect::<Vec<_>>()
                .join("\n"),
            Description::Other(value) => {
                tracing::debug!("unexpected description shape, stringifying");
                value.to_string()
            }
        }
    }
}

/// Concatenated `text` of a node's inline children.
fn inline_text(node: &Value) -> String {
    node.get("content")
        .and_then(Value::as_array)
        .map(|runs| {
            runs.iter()
                .filter_map(|run| run.get("text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

fn render_block(block: &Value) -> Option<String> {
    match block.get("type").and_then(Value::as_str)? {
        "paragraph" => Some(inline_text(block)),
        "codeBlock" => Some(format!("```\n{}\n```", inline_text(block))),
        _ => None,
    }
}

/// Flattens a raw description field to text.
pub fn description_text(value: Option<&Value>) -> String {
    Description::classify(value).to_text()
}

#[cfg(test)]
#[path = "description_tests.rs"]
mod tests;
