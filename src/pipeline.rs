//! The export pipeline: fetch, decode, check, then write every output.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::completeness::{self, Completeness};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::{self, ExportReport};
use crate::search::{SearchClient, SearchResponse};

/// What one pipeline run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub total: i64,
    pub received: usize,
    pub completeness: Completeness,
    pub export: ExportReport,
}

/// Runs the pipeline stages in order against one configuration.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Query the search service and write the JSON dump, the bucket CSVs and
    /// the summary (to `out`), in that order.
    pub fn run<W: Write>(&self, client: &SearchClient, out: &mut W) -> Result<RunReport> {
        info!("Querying {}", client.endpoint());
        let resp = client.search()?;
        let completeness = completeness::check(&resp);

        let json_path = self.config.json_path();
        export::write_json(&resp, &json_path)?;
        info!("Wrote {} sessions to {:?}", resp.items.len(), json_path);

        self.finish(resp, completeness, out)
    }

    /// Re-export bucket CSVs and the summary from a saved JSON dump.
    pub fn export_dump<W: Write>(&self, dump: &Path, out: &mut W) -> Result<RunReport> {
        let resp = export::read_json(dump)?;
        let completeness = completeness::check(&resp);
        self.finish(resp, completeness, out)
    }

    fn finish<W: Write>(
        &self,
        resp: SearchResponse,
        completeness: Completeness,
        out: &mut W,
    ) -> Result<RunReport> {
        let output_dir = self.config.output_dir();
        let report = export::write_csv(&resp, self.config.output.layout, &output_dir)?;
        info!(
            "Wrote {} sessions to {} CSV files ({} unclassified)",
            report.rows_written(),
            report.files.len(),
            report.unclassified.len()
        );

        export::print_summary(&resp, out).map_err(Error::Summary)?;

        Ok(RunReport {
            total: resp.total,
            received: resp.items.len(),
            completeness,
            export: report,
        })
    }
}
