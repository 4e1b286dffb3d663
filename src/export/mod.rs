//! Exporters for a decoded search response.
//!
//! - [`write_json`] dumps the whole response
//! - [`write_csv`] splits sessions into bucket files according to a [`Layout`]
//! - [`print_summary`] reports facet counts

mod buckets;
mod classify;
mod json;
mod summary;

pub use buckets::{format_timestamp, record, write_csv, ExportReport, HEADER, SPEAKER_SEPARATOR};
pub use classify::{Bucket, Layout};
pub use json::{read_json, write_json};
pub use summary::{print_summary, summary_facets, write_facet, write_summary};

/// File name of the JSON dump.
pub const JSON_FILE: &str = "ignite_search_results.json";
