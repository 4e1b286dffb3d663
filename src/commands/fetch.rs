//! Fetch command handler

use anyhow::{Context, Result};
use std::io;

use ignite_sessions::cli::GlobalArgs;
use ignite_sessions::{Pipeline, SearchClient};

/// Query the search service and export every output file.
#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs) -> Result<()> {
    let config = super::load_config(global)?;
    let client = SearchClient::new(config.endpoint_url()?, config.timeout())
        .context("Failed to set up search client")?;

    let pipeline = Pipeline::new(config);
    let mut stdout = io::stdout().lock();
    pipeline
        .run(&client, &mut stdout)
        .context("Session export failed")?;
    Ok(())
}
