//! # uniqstr CLI
//!
//! Command-line interface for generating content-derived identifiers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use uniqstr::{
    commands::{self, GenArgs, HashArgs, HashFormat},
    config::{GlobalConfig, Overrides},
    ui,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/uniqstr/config   Global configuration (seed, separator, max_length, color)

Identifier Format:
  13 characters from a-z and 2-7, e.g. \"wfdb6h7odcoiq\" for \"foo\".
  Values are joined with '-' before hashing, so `gen a b` equals `gen a-b`.

Getting Started:
  uniqstr gen my-app prod          Identifier for the values \"my-app\" and \"prod\"
  uniqstr hash foo                 Raw 64-bit hash of \"foo\"
  uniqstr check wfdb6h7odcoiq      Verify an identifier's shape

Learn more:
  uniqstr <COMMAND> --help         Show detailed help for a command";

#[derive(Parser)]
#[command(name = "uniqstr")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Deterministic 13-character identifiers derived from text")]
#[command(
    long_about = "uniqstr derives a stable, compact identifier from one or more text values. \
The values are joined with '-', hashed with a fast non-cryptographic 64-bit hash, and \
encoded as 13 lowercase Base32 characters.\n\n\
The same values always produce the same identifier, on every platform. Identifiers are \
safe to embed in names that disallow uppercase letters or punctuation."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Print diagnostic output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the identifier for one or more values
    #[command(
        long_about = "Generate the identifier for one or more values.\n\n\
Values are joined with '-' in the given order, without trimming. The joined input may \
be at most 131072 characters long (UTF-16 code units).\n\n\
With --json each value is parsed as JSON. Only JSON strings are accepted; any other \
value is rejected as an invalid parameter type.",
        after_help = "Examples:\n  \
uniqstr gen foo                       -> wfdb6h7odcoiq\n  \
uniqstr gen foo bar                   Same as: uniqstr gen foo-bar\n  \
uniqstr gen --json '\"foo\"'            JSON string input\n  \
uniqstr gen --seed 1 foo              Non-default seed (differs from defaults)\n\n\
Output: Prints the identifier."
    )]
    Gen {
        /// Values to combine
        #[arg(required = true)]
        values: Vec<String>,

        /// Parse each value as JSON
        #[arg(long)]
        json: bool,

        /// Hash seed (overrides config)
        #[arg(long)]
        seed: Option<u32>,

        /// Separator between values (overrides config)
        #[arg(long)]
        separator: Option<String>,

        /// Maximum joined length (overrides config)
        #[arg(long)]
        max_length: Option<usize>,
    },

    /// Print the raw 64-bit hash of a string
    #[command(after_help = "Examples:\n  \
uniqstr hash foo                      -> b1461f1fee189c88\n  \
uniqstr hash --format dec foo         Decimal output\n  \
printf 'foo' | uniqstr hash --stdin   Hash raw bytes from stdin")]
    Hash {
        /// Text to hash (UTF-8)
        #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
        text: Option<String>,

        /// Read bytes from standard input
        #[arg(long)]
        stdin: bool,

        /// Hash seed (overrides config)
        #[arg(long)]
        seed: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value = "hex")]
        format: HashFormat,
    },

    /// Encode a 64-bit value as a 13-character identifier
    #[command(after_help = "Examples:\n  \
uniqstr encode 0                      -> aaaaaaaaaaaaa\n  \
uniqstr encode 0xb1461f1fee189c88     -> wfdb6h7odcoiq")]
    Encode {
        /// Decimal or 0x-prefixed hex value
        value: String,
    },

    /// Check that a string is a well-formed identifier
    Check {
        /// Identifier to check
        id: String,
    },

    /// Create or repair the global config file
    Setup,

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        ui::print_error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    ui::set_verbose(cli.verbose);

    // Unreadable config is reported by the command that loads it
    if let Ok(global) = GlobalConfig::load() {
        if !global.color {
            ui::set_color(false);
        }
    }

    match cli.command {
        Commands::Gen {
            values,
            json,
            seed,
            separator,
            max_length,
        } => commands::generate(GenArgs {
            values,
            json,
            overrides: Overrides {
                seed,
                separator,
                max_length,
            },
        }),

        Commands::Hash {
            text,
            stdin,
            seed,
            format,
        } => commands::hash(&HashArgs {
            text,
            stdin,
            seed,
            format,
        }),

        Commands::Encode { value } => commands::encode(&value),

        Commands::Check { id } => commands::check(&id),

        Commands::Setup => commands::setup(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
