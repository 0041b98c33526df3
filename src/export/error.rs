//! Export parsing errors.

use std::path::PathBuf;

/// Errors that can occur while reading an Apple Health export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export file not found: {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML near byte {position}: {source}")]
    Malformed {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("failed to read export data: {0}")]
    Io(#[from] std::io::Error),
}
