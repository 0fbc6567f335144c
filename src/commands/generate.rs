//! # Generate Command
//!
//! Generates the identifier for one or more values.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::{
    config::{Config, Overrides},
    ui,
};

/// Arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenArgs {
    /// Raw values from the command line, in order
    pub values: Vec<String>,
    /// Parse each value as JSON instead of taking it literally
    pub json: bool,
    pub overrides: Overrides,
}

/// Executes the generate command.
pub fn execute(args: GenArgs) -> Result<()> {
    let id = generate(args)?;

    // Output the identifier (for scripting)
    println!("{id}");

    Ok(())
}

/// Resolves settings, validates the values and returns their identifier.
pub fn generate(args: GenArgs) -> Result<String> {
    let config = Config::load(args.overrides)?;
    let generator = config.generator();

    if !config.is_default() {
        ui::print_warnings(&[format!(
            "using seed={} separator={:?} max_length={}; identifiers differ from the defaults",
            generator.seed(),
            generator.separator(),
            generator.max_length()
        )]);
    }

    let params = parse_values(&args.values, args.json)?;
    ui::debug(format_args!("{} parameter(s)", params.len()));

    let id = generator.generate(&params)?;
    ui::debug(format_args!("identifier {id}"));

    Ok(id)
}

/// Converts raw arguments into parameter values.
fn parse_values(values: &[String], json: bool) -> Result<Vec<Value>> {
    if !json {
        return Ok(values.iter().cloned().map(Value::String).collect());
    }

    values
        .iter()
        .map(|raw| {
            serde_json::from_str(raw).with_context(|| format!("Invalid JSON value: {raw}"))
        })
        .collect()
}
