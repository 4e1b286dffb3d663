//! Ignite Sessions - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ignite_sessions::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose);

    match cli.command {
        None | Some(Commands::Fetch) => commands::fetch::handle(&cli.global),
        Some(Commands::Export { dump }) => commands::export::handle(&cli.global, &dump),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&cli.global),
            ConfigCommands::Init { path, force } => commands::config::handle_init(&path, force),
        },
    }
}

/// Log to stdout. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .init();
}
