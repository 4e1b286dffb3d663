//! Export command handler

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use ignite_sessions::cli::GlobalArgs;
use ignite_sessions::Pipeline;

/// Re-export CSV files and the summary from a saved JSON dump.
#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs, dump: &Path) -> Result<()> {
    let config = super::load_config(global)?;
    let pipeline = Pipeline::new(config);
    let mut stdout = io::stdout().lock();
    pipeline
        .export_dump(dump, &mut stdout)
        .with_context(|| format!("Failed to export from {:?}", dump))?;
    Ok(())
}
