// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use jfrs::Cli;

fn main() {
    let cli = Cli::parse();
    jfrs::logging::setup_logging(cli.verbose);
    if let Err(e) = jfrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
