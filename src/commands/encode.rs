//! # Encode Command
//!
//! Encodes a 64-bit value into its 13-character Base32 form.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::id::base32;

/// Executes the encode command.
pub fn execute(value: &str) -> Result<()> {
    println!("{}", base32::encode(parse_u64(value)?));
    Ok(())
}

/// Parses a decimal or `0x`-prefixed hex value. Underscores are ignored.
pub fn parse_u64(input: &str) -> Result<u64> {
    let cleaned = input.trim().replace('_', "");
    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => cleaned.parse(),
    };
    parsed.with_context(|| format!("Not a 64-bit unsigned value: {input}"))
}
