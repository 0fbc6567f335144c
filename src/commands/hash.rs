//! # Hash Command
//!
//! Prints the raw 64-bit hash of a string or of standard input.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::{
    config::{Config, Overrides},
    id::hash,
    ui,
};

/// Output format for hash values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HashFormat {
    /// 16 lowercase hex digits
    #[default]
    Hex,
    /// Unsigned decimal
    Dec,
}

impl HashFormat {
    pub fn format(self, value: u64) -> String {
        match self {
            Self::Hex => format!("{value:016x}"),
            Self::Dec => value.to_string(),
        }
    }
}

/// Arguments for the hash command
#[derive(Debug, Clone, Default)]
pub struct HashArgs {
    /// Text to hash; ignored when `stdin` is set
    pub text: Option<String>,
    /// Read raw bytes from standard input
    pub stdin: bool,
    pub seed: Option<u32>,
    pub format: HashFormat,
}

/// Executes the hash command.
pub fn execute(args: &HashArgs) -> Result<()> {
    let data = if args.stdin {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read standard input")?;
        buf
    } else {
        args.text
            .clone()
            .context("No input given. Pass TEXT or --stdin")?
            .into_bytes()
    };

    println!("{}", compute(&data, args)?);
    Ok(())
}

/// Hashes `data` with the effective seed and formats the result.
pub fn compute(data: &[u8], args: &HashArgs) -> Result<String> {
    let config = Config::load(Overrides {
        seed: args.seed,
        ..Overrides::default()
    })?;

    let seed = config.seed();
    ui::debug(format_args!("hashing {} byte(s) with seed {seed}", data.len()));

    Ok(args.format.format(hash::hash64(data, seed)))
}
