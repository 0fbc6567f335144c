//! # Setup Command
//!
//! Creates the global config, or validates and repairs an existing one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::GlobalConfig, ui};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    eprintln!("{}\n", "Setting up uniqstr...".bold());

    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        ui::print_success(format_args!("Created global config: {}", path.display()));
        return Ok(());
    }

    let validation = GlobalConfig::update_if_needed()?;
    if validation.has_changes() {
        let mut warnings = Vec::new();
        for field in &validation.missing {
            warnings.push(format!("Added missing field: {field}"));
        }
        for field in &validation.invalid {
            warnings.push(format!("Removed unknown field: {field}"));
        }
        ui::print_warnings(&warnings);
        ui::print_success(format_args!("Updated global config: {}", path.display()));
    } else {
        ui::print_success(format_args!(
            "Global config already exists: {}",
            path.display()
        ));
    }

    Ok(())
}
