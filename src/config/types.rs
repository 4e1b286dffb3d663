//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::export::{Layout, JSON_FILE};
use crate::search::DEFAULT_ENDPOINT;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Search endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout, covering connect through reading the body
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

pub fn default_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

pub fn default_timeout_secs() -> u64 {
    30
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory all output paths are relative to
    #[serde(default = "default_directory")]
    pub directory: String,
    /// File name of the JSON dump
    #[serde(default = "default_json_file")]
    pub json_file: String,
    #[serde(default)]
    pub layout: Layout,
}

pub fn default_directory() -> String {
    ".".to_string()
}

pub fn default_json_file() -> String {
    JSON_FILE.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            json_file: default_json_file(),
            layout: Layout::default(),
        }
    }
}
