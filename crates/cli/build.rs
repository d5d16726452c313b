// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    let vars = [
        ("JFLAT_CONFIG", "JFLAT_CONFIG"),
        ("JIRA_URL", "JIRA_URL"),
        ("CUSTOM_FIELD_EPIC_LINK", "CUSTOM_FIELD_EPIC_LINK"),
        ("CUSTOM_FIELD_STORY_POINTS", "CUSTOM_FIELD_STORY_POINTS"),
        ("CUSTOM_FIELD_SPRINT", "CUSTOM_FIELD_SPRINT"),
        ("XDG_CONFIG_HOME", "XDG_CONFIG_HOME"),
    ];

    for (const_name, env_name) in &vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    Ok(())
}
