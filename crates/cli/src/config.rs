// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Layered configuration for the CLI.
//!
//! The normalizer's context is assembled from, lowest precedence first:
//! - built-in defaults ([`NormalizeConfig::default`])
//! - a TOML file (`--config`, `$JFLAT_CONFIG`, or `~/.config/jflat/config.toml`)
//! - environment variables (`JIRA_URL`, `CUSTOM_FIELD_*`)
//! - command-line flags
//!
//! ```toml
//! base_url = "https://acme.atlassian.net/"
//!
//! [fields]
//! epic_link = "customfield_10014"
//! story_points = "customfield_10016"
//! sprint = "customfield_10020"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use jf_core::NormalizeConfig;
use serde::Deserialize;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "jflat";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Custom-field id overrides from one configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldOverrides {
    pub epic_link: Option<String>,
    pub story_points: Option<String>,
    pub sprint: Option<String>,
}

/// Values set by one configuration layer. Unset values leave lower layers
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    pub base_url: Option<String>,
    #[serde(default)]
    pub fields: FieldOverrides,
}

impl Overrides {
    /// Reads the `JIRA_URL` and `CUSTOM_FIELD_*` environment variables.
    pub fn from_env() -> Self {
        Overrides {
            base_url: env::jira_url(),
            fields: FieldOverrides {
                epic_link: env::epic_link_field(),
                story_points: env::story_points_field(),
                sprint: env::sprint_field(),
            },
        }
    }

    /// Parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| Error::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Writes every value this layer sets onto `config`.
    pub fn apply(&self, config: &mut NormalizeConfig) {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(id) = &self.fields.epic_link {
            config.fields.epic_link = id.clone();
        }
        if let Some(id) = &self.fields.story_points {
            config.fields.story_points = id.clone();
        }
        if let Some(id) = &self.fields.sprint {
            config.fields.sprint = id.clone();
        }
    }
}

/// Where the config file layer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFile {
    /// Named by `--config` or `$JFLAT_CONFIG`; must exist.
    Explicit(PathBuf),
    /// The per-user default location; skipped when missing.
    Default(PathBuf),
    /// No location could be determined.
    None,
}

impl ConfigFile {
    /// Picks the config file for this run.
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return ConfigFile::Explicit(path.to_path_buf());
        }
        if let Some(path) = env::config_file() {
            return ConfigFile::Explicit(path);
        }
        match default_config_path() {
            Some(path) => ConfigFile::Default(path),
            None => ConfigFile::None,
        }
    }

    /// The overrides this file contributes, if any.
    pub fn overrides(&self) -> Result<Option<Overrides>> {
        match self {
            ConfigFile::Explicit(path) => Overrides::load(path).map(Some),
            ConfigFile::Default(path) if path.exists() => Overrides::load(path).map(Some),
            ConfigFile::Default(_) | ConfigFile::None => Ok(None),
        }
    }
}

/// The per-user config path: `$XDG_CONFIG_HOME/jflat/config.toml`, falling
/// back to `~/.config/jflat/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = env::xdg_config_home().or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Applies layers in order over the defaults. Later layers win.
pub fn layer(layers: &[&Overrides]) -> NormalizeConfig {
    let mut config = NormalizeConfig::default();
    for overrides in layers {
        overrides.apply(&mut config);
    }
    config
}

/// Resolves the effective configuration for a run.
///
/// # Errors
///
/// Returns [`Error::Config`] for an unreadable or invalid config file, and
/// [`Error::Core`] if the result fails validation.
pub fn resolve(explicit: Option<&Path>, flags: &Overrides) -> Result<NormalizeConfig> {
    let file = ConfigFile::locate(explicit);
    tracing::debug!("config file: {:?}", file);
    let from_file = file.overrides()?.unwrap_or_default();
    let from_env = Overrides::from_env();

    let config = layer(&[&from_file, &from_env, flags]);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
