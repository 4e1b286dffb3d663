//! Configuration management
//!
//! Every setting has a built-in default, so running without a config file
//! reproduces the fixed behavior of the exporter. A TOML file given with
//! `--config` overrides the defaults, and command-line flags override both.

mod io;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::export::Layout;

impl Config {
    /// Load configuration from `path`, or return defaults if none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        io::load(path)
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save(self, path)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Check values that serde cannot check on its own.
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.endpoint.url)
            .map_err(|e| format!("endpoint.url '{}' is not a valid URL: {}", self.endpoint.url, e))?;
        if self.endpoint.timeout_secs == 0 {
            return Err("endpoint.timeout_secs must be greater than 0".to_string());
        }
        if self.output.json_file.trim().is_empty() {
            return Err("output.json_file must not be empty".to_string());
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file/default values.
    pub fn apply_overrides(&mut self, output_dir: Option<&Path>, layout: Option<Layout>) {
        if let Some(dir) = output_dir {
            self.output.directory = dir.to_string_lossy().to_string();
        }
        if let Some(layout) = layout {
            self.output.layout = layout;
        }
    }

    /// Parsed endpoint URL
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint.url)
            .with_context(|| format!("Invalid endpoint URL: {}", self.endpoint.url))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.endpoint.timeout_secs)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.directory)
    }

    /// Full path of the JSON dump
    pub fn json_path(&self) -> PathBuf {
        self.output_dir().join(&self.output.json_file)
    }
}
