//! Ignite Sessions Library
//!
//! Fetches the conference session catalog from the search service and exports
//! it as a JSON dump, CSV files split by session type, and a facet summary.

pub mod cli;
pub mod completeness;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod search;

pub use completeness::Completeness;
pub use config::Config;
pub use error::{Error, Result};
pub use export::{ExportReport, Layout};
pub use pipeline::{Pipeline, RunReport};
pub use search::{SearchClient, SearchResponse, Session};
