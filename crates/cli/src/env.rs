// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Reads a variable, treating empty values as unset.
fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the value of `JFLAT_CONFIG` if set.
pub fn config_file() -> Option<PathBuf> {
    non_empty(vars::JFLAT_CONFIG).map(PathBuf::from)
}

/// Returns the value of `JIRA_URL` if set.
pub fn jira_url() -> Option<String> {
    non_empty(vars::JIRA_URL)
}

/// Returns the value of `CUSTOM_FIELD_EPIC_LINK` if set.
pub fn epic_link_field() -> Option<String> {
    non_empty(vars::CUSTOM_FIELD_EPIC_LINK)
}

/// Returns the value of `CUSTOM_FIELD_STORY_POINTS` if set.
pub fn story_points_field() -> Option<String> {
    non_empty(vars::CUSTOM_FIELD_STORY_POINTS)
}

/// Returns the value of `CUSTOM_FIELD_SPRINT` if set.
pub fn sprint_field() -> Option<String> {
    non_empty(vars::CUSTOM_FIELD_SPRINT)
}

/// Returns the value of `XDG_CONFIG_HOME` if set.
pub fn xdg_config_home() -> Option<PathBuf> {
    non_empty(vars::XDG_CONFIG_HOME).map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
