// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::{FieldOverrides, Overrides};

/// Output format for normalized issues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Normalization:
  normalize   Flatten raw issue JSON into stable records

Setup & Configuration:
  config      Show effective configuration
  schema      Print JSON Schema for normalized output
  completion  Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  jflat normalize issue.json               Normalize one saved issue
  jira-search | jflat normalize            Normalize a search response from stdin
  jflat normalize -o text issues.json      Human-readable summary
  jflat config show                        Show effective settings";

#[derive(Parser)]
#[command(name = "jflat", version)]
#[command(about = "Flatten raw issue-tracker JSON into stable, defaulted records")]
#[command(
    long_about = "Flatten raw issue-tracker JSON into stable, defaulted records.\n\n\
    Resolves names, derives durations and classifies blocking links. Reads files or stdin."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Log debug detail to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Custom-field id and base URL overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct ContextArgs {
    /// Tracker base URL used for browse links [env: JIRA_URL]
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Epic link custom-field id [env: CUSTOM_FIELD_EPIC_LINK]
    #[arg(long, value_name = "ID")]
    pub epic_link_field: Option<String>,

    /// Story points custom-field id [env: CUSTOM_FIELD_STORY_POINTS]
    #[arg(long, value_name = "ID")]
    pub story_points_field: Option<String>,

    /// Sprint custom-field id [env: CUSTOM_FIELD_SPRINT]
    #[arg(long, value_name = "ID")]
    pub sprint_field: Option<String>,

    /// Config file [env: JFLAT_CONFIG]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ContextArgs {
    /// The flag layer of the configuration.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            fields: FieldOverrides {
                epic_link: self.epic_link_field.clone(),
                story_points: self.story_points_field.clone(),
                sprint: self.sprint_field.clone(),
            },
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize raw issue JSON (one issue, a list, or a search response)
    #[command(after_help = "Examples:\n  \
        jflat normalize issue.json                 Normalize a saved issue\n  \
        jflat normalize - < search.json            Read from stdin\n  \
        jflat normalize -o text issues.json        Human-readable output\n  \
        jflat normalize --sprint-field customfield_10104 issue.json")]
    Normalize {
        /// Input file (`-` or omitted reads stdin)
        file: Option<String>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print the JSON Schema of `normalize` output
    Schema,

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show {
        #[command(flatten)]
        context: ContextArgs,
    },

    /// Print the default config file location
    Path,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
