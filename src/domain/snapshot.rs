//! Snapshot documents: `{ "data": [ { "x": 1, "y": 2 }, ... ] }`.

use super::Cell;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("read snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    data: Vec<Cell>,
}

/// Parse a snapshot document into its list of live cells.
/// Duplicates are passed through; the cell set collapses them.
pub fn parse(document: &str) -> Result<Vec<Cell>, SnapshotError> {
    let doc: SnapshotDocument = serde_json::from_str(document)?;
    Ok(doc.data)
}

/// Read a snapshot document from disk and parse it
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Cell>, SnapshotError> {
    let path = path.as_ref();
    let txt = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&txt)
}
