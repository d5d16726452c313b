// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization context.
//!
//! Tracker instances assign their own ids to custom fields, so the ids for
//! epic link, story points and sprint are passed in rather than hard-coded.
//! The base URL is used only to build each issue's browse link.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://localhost/";
const DEFAULT_EPIC_LINK_FIELD: &str = "customfield_10014";
const DEFAULT_STORY_POINTS_FIELD: &str = "customfield_10016";
const DEFAULT_SPRINT_FIELD: &str = "customfield_10020";

/// Custom-field ids for the three tracker-specific fields the normalizer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIds {
    #[serde(default = "default_epic_link")]
    pub epic_link: String,
    #[serde(default = "default_story_points")]
    pub story_points: String,
    #[serde(default = "default_sprint")]
    pub sprint: String,
}

fn default_epic_link() -> String {
    DEFAULT_EPIC_LINK_FIELD.to_string()
}

fn default_story_points() -> String {
    DEFAULT_STORY_POINTS_FIELD.to_string()
}

fn default_sprint() -> String {
    DEFAULT_SPRINT_FIELD.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for FieldIds {
    fn default() -> Self {
        FieldIds {
            epic_link: default_epic_link(),
            story_points: default_story_points(),
            sprint: default_sprint(),
        }
    }
}

/// Everything the normalizer needs besides the raw issue itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Tracker base URL, e.g. `https://acme.atlassian.net/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub fields: FieldIds,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        NormalizeConfig {
            base_url: default_base_url(),
            fields: FieldIds::default(),
        }
    }
}

impl NormalizeConfig {
    /// Creates a config for the given base URL with default field ids.
    pub fn new(base_url: impl Into<String>) -> Self {
        NormalizeConfig {
            base_url: base_url.into(),
            fields: FieldIds::default(),
        }
    }

    /// Sets the custom-field ids (builder pattern).
    pub fn with_fields(mut self, fields: FieldIds) -> Self {
        self.fields = fields;
        self
    }

    /// Browse URL for an issue key. Trailing slashes on the base are dropped.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url.trim_end_matches('/'), key)
    }

    /// Checks that the field ids are non-empty and the base URL has an
    /// http(s) scheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFieldId`] or [`Error::InvalidBaseUrl`].
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::InvalidBaseUrl(self.base_url.clone()));
        }
        for (field, id) in [
            ("epic_link", &self.fields.epic_link),
            ("story_points", &self.fields.story_points),
            ("sprint", &self.fields.sprint),
        ] {
            if id.trim().is_empty() {
                return Err(Error::EmptyFieldId { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
