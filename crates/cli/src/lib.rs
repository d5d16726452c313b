// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jfrs - the library behind the `jflat` CLI.
//!
//! Wraps the [`jf_core`] normalization engine with input handling
//! (files, stdin, search-response envelopes), layered configuration and
//! output rendering.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument definitions
//! - [`config`] - defaults, TOML file, environment and flag layers
//! - [`input`] - reading raw JSON and unwrapping search responses
//! - [`Error`] - error types for the host around the engine

mod cli;
mod commands;
mod display;
mod env;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;

pub use cli::{Cli, Command, ConfigCommand, ContextArgs, OutputFormat};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Runs one parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Normalize {
            file,
            output,
            context,
        } => commands::normalize::run(file, output, context),
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Schema => commands::schema::run(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "jflat", &mut std::io::stdout());
            Ok(())
        }
    }
}
