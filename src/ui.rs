//! # UI Utilities
//!
//! Stderr diagnostics shared across commands. Results go to stdout untouched
//! so output stays scriptable; everything here goes to stderr.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{OwoColorize, Stream, Style};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enables or disables `debug` output for the rest of the process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Enables or disables colored diagnostics.
pub fn set_color(enabled: bool) {
    owo_colors::set_override(enabled);
}

/// Prints a diagnostic line when verbose output is enabled.
pub fn debug(message: impl std::fmt::Display) {
    if is_verbose() {
        eprintln!(
            "{} {}",
            "debug:".if_supports_color(Stream::Stderr, |s| s.dimmed()),
            message
        );
    }
}

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: impl std::fmt::Display) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stream::Stderr, |s| s.green()),
        message
    );
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!(
            "{} {}",
            "warning:".if_supports_color(Stream::Stderr, |s| s.yellow()),
            warning
        );
    }
}

/// Prints an error with red prefix, including its context chain.
pub fn print_error(err: &anyhow::Error) {
    eprintln!(
        "{} {err:#}",
        "error:".if_supports_color(Stream::Stderr, |s| s.style(Style::new().red().bold()))
    );
}
