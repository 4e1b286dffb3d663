//! JSON dump of the full search response.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::search::SearchResponse;

/// Serialize `resp` and write it to `path`, replacing any existing file.
pub fn write_json(resp: &SearchResponse, path: &Path) -> Result<()> {
    let json = serde_json::to_vec(resp).map_err(Error::Encode)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    fs::write(path, json).map_err(|e| Error::io(path, e))
}

/// Read a JSON dump written by [`write_json`].
pub fn read_json(path: &Path) -> Result<SearchResponse> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    SearchResponse::from_slice(&bytes)
}
