//! Command handlers for the ignite-sessions CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod config;
pub mod export;
pub mod fetch;

use anyhow::Result;

use ignite_sessions::cli::GlobalArgs;
use ignite_sessions::Config;

/// Load the configuration named by `--config` and apply flag overrides.
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = Config::load(global.config.as_deref())?;
    config.apply_overrides(global.output_dir.as_deref(), global.layout);
    Ok(config)
}
