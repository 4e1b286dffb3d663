//! CLI definitions for ignite-sessions
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};

use crate::export::Layout;

/// Version string: package version plus the git SHA for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ignite-sessions")]
#[command(about = "Export the conference session catalog to JSON and CSV")]
#[command(
    long_about = "Ignite Sessions - export the conference session catalog.

Queries the session search service once and writes:
    ignite_search_results.json     The full search response
    session/bo45/all.csv           45-minute breakout sessions
    session/bo75/all.csv           75-minute breakout sessions
    session/th20/all.csv           20-minute theater sessions

With --layout simple, sessions are split into ignite_breakout_sessions.csv
and ignite_theater_sessions.csv instead. A facet summary is printed when
the export finishes.

QUICK START:
    ignite-sessions                          Fetch and export everything
    ignite-sessions --output-dir out         Write all files under out/
    ignite-sessions export dump.json         Re-export CSVs from a saved dump"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory all output files are written under
    #[arg(long, short, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// How sessions are split into CSV files
    #[arg(long, global = true, value_enum)]
    pub layout: Option<Layout>,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch sessions and export JSON, CSV and summary (default)
    #[command(long_about = "Query the search service and export the results.

Sends one search request, checks that every reported session was returned,
writes the JSON dump, splits sessions into CSV files by session type and
prints a summary of the facet counts.

A mismatch between returned and reported sessions, and sessions whose type
matches no CSV file, are reported as warnings and do not fail the run.")]
    Fetch,

    /// Re-export CSV files and summary from a saved JSON dump
    #[command(long_about = "Re-export CSV files and the summary from a saved JSON dump.

No network request is made and the dump is not rewritten.

EXAMPLE:
    ignite-sessions export ignite_search_results.json --layout simple")]
    Export {
        /// Path to a JSON dump written by a previous fetch
        dump: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Write the default configuration to a file
    Init {
        /// Where to write the configuration file
        #[arg(default_value = "ignite-sessions.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
