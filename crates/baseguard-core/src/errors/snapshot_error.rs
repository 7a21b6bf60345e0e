//! Baseline snapshot errors.

use std::path::PathBuf;

/// Errors that can occur while loading a Baseline snapshot dump.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error reading snapshot {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Snapshot parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
