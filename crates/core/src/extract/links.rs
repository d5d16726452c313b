// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of issue links into blocking relationships.
//!
//! Each entry of `issuelinks` names a link type and references the other
//! issue as `outwardIssue` or `inwardIssue`. Both sides are checked on every
//! link; nothing assumes they are exclusive.

use serde_json::Value;

use crate::extract::{issue_ref, text_or_empty};
use crate::issue::IssueRef;

/// Links sorted into buckets, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBuckets {
    /// Issues this issue blocks.
    pub blocks: Vec<IssueRef>,
    /// Issues blocking this issue.
    pub blocked_by: Vec<IssueRef>,
    /// Keys of other outward links.
    pub relates_to: Vec<String>,
}

impl LinkBuckets {
    pub fn is_blocked(&self) -> bool {
        !self.blocked_by.is_empty()
    }
}

/// The linked issue on one side of a link, if that side is populated.
fn side<'a>(link: &'a Value, name: &str) -> Option<&'a Value> {
    link.get(name).filter(|v| v.is_object())
}

/// Lowercased text of one attribute of the link type.
fn type_text(link: &Value, attr: &str) -> String {
    link.get("type")
        .and_then(|t| t.get(attr))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase()
}

/// Sorts `issuelinks` into blocks / blocked-by / relates-to.
///
/// Matching is a case-insensitive substring test on the link type name or
/// on the description for that direction (`type.outward`, `type.inward`):
/// outward links matching "blocks" go to `blocks`, all other outward links
/// contribute their key to `relates_to`, and inward links matching
/// "blocked" go to `blocked_by`.
pub fn classify_links(value: Option<&Value>) -> LinkBuckets {
    let mut buckets = LinkBuckets::default();
    let Some(Value::Array(links)) = value else {
        return buckets;
    };

    for link in links {
        let type_name = type_text(link, "name");

        if let Some(outward) = side(link, "outwardIssue") {
            if type_name.contains("blocks") || type_text(link, "outward").contains("blocks") {
                buckets.blocks.push(issue_ref(outward));
            } else {
                buckets.relates_to.push(text_or_empty(outward.get("key")));
            }
        }

        if let Some(inward) = side(link, "inwardIssue") {
            if type_name.contains("blocked") || type_text(link, "inward").contains("blocked") {
                buckets.blocked_by.push(issue_ref(inward));
            }
        }
    }

    buckets
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
