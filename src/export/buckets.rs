//! CSV export of sessions, one file per bucket.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, SecondsFormat};
use csv::Writer;
use tracing::{debug, warn};

use super::classify::Layout;
use crate::error::{Error, Result};
use crate::search::{SearchResponse, Session};

/// Header row of every bucket file.
pub const HEADER: [&str; 8] = [
    "Session ID",
    "Session Code",
    "Title",
    "Session Type",
    "Level",
    "Format",
    "Speaker Names",
    "Last Update",
];

/// Separator between speaker names inside the speaker column.
pub const SPEAKER_SEPARATOR: &str = ";";

/// What a CSV export wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Bucket files in layout order with the number of data rows in each.
    pub files: Vec<(PathBuf, usize)>,
    /// Session types that matched no bucket, in encounter order.
    pub unclassified: Vec<String>,
}

impl ExportReport {
    pub fn rows_written(&self) -> usize {
        self.files.iter().map(|(_, rows)| rows).sum()
    }
}

/// An open bucket file.
struct BucketWriter {
    path: PathBuf,
    writer: Writer<File>,
    rows: usize,
}

impl BucketWriter {
    /// Create (or truncate) the file and write the header row.
    fn create(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
        }

        let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut writer = Writer::from_writer(file);
        writer
            .write_record(HEADER)
            .map_err(|e| Error::csv(&path, e))?;

        Ok(Self {
            path,
            writer,
            rows: 0,
        })
    }

    /// Append one session and flush it to disk.
    fn write(&mut self, session: &Session) -> Result<()> {
        self.writer
            .write_record(record(session))
            .map_err(|e| Error::csv(&self.path, e))?;
        self.flush()?;
        self.rows += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::io(&self.path, e))
    }
}

/// The CSV row for a session, in [`HEADER`] order.
pub fn record(session: &Session) -> [String; 8] {
    [
        session.session_id.clone(),
        session.session_code.clone(),
        session.title.clone(),
        session.session_type.clone(),
        session.level.clone(),
        session.format.clone(),
        session.speaker_names.join(SPEAKER_SEPARATOR),
        format_timestamp(&session.last_update),
    ]
}

/// RFC 3339 with whole seconds and `Z` for UTC.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Split sessions across the layout's bucket files under `output_dir`.
///
/// Every bucket file is created, with its header, before any session is
/// written. Sessions matching no bucket are skipped and reported.
pub fn write_csv(resp: &SearchResponse, layout: Layout, output_dir: &Path) -> Result<ExportReport> {
    let mut writers = layout
        .paths(output_dir)
        .into_iter()
        .map(BucketWriter::create)
        .collect::<Result<Vec<_>>>()?;

    let mut unclassified = Vec::new();

    for session in &resp.items {
        match layout.classify(&session.session_type) {
            Some(index) => writers[index].write(session)?,
            None => {
                warn!(
                    "No output file defined for session type: {}",
                    session.session_type
                );
                unclassified.push(session.session_type.clone());
            }
        }
    }

    let mut files = Vec::with_capacity(writers.len());
    for mut bucket in writers {
        bucket.flush()?;
        debug!("wrote {} rows to {:?}", bucket.rows, bucket.path);
        files.push((bucket.path, bucket.rows));
    }

    Ok(ExportReport {
        files,
        unclassified,
    })
}
