//! Config subcommands handler

use anyhow::Result;
use std::path::Path;

use ignite_sessions::cli::GlobalArgs;
use ignite_sessions::Config;

/// Show the effective configuration (file plus flag overrides) as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(global: &GlobalArgs) -> Result<()> {
    let config = super::load_config(global)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    Config::default().save(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
