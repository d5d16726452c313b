// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use jf_core::NormalizeConfig;

use crate::cli::{ConfigCommand, ContextArgs};
use crate::config::{self, ConfigFile};
use crate::error::Result;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { context } => run_show(&context),
        ConfigCommand::Path => run_path(),
    }
}

/// Print the effective configuration after all layers apply.
fn run_show(context: &ContextArgs) -> Result<()> {
    let config = config::resolve(context.config.as_deref(), &context.overrides())?;
    print!("{}", show(&config)?);
    Ok(())
}

/// Print where the config file is read from.
fn run_path() -> Result<()> {
    match describe_path(&ConfigFile::locate(None)) {
        Some(line) => println!("{}", line),
        None => eprintln!("warning: no home directory; only env and flags apply"),
    }
    Ok(())
}

pub fn show(config: &NormalizeConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

pub fn describe_path(file: &ConfigFile) -> Option<String> {
    match file {
        ConfigFile::Explicit(path) => Some(path.display().to_string()),
        ConfigFile::Default(path) if path.exists() => Some(path.display().to_string()),
        ConfigFile::Default(path) => Some(format!("{} (not found)", path.display())),
        ConfigFile::None => None,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
