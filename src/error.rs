use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The scan root is missing. Raised before anything is read or written.
    #[error("source path {} does not exist", .path.display())]
    SourceNotFound { path: PathBuf },

    /// The tree was built but the output file could not be written.
    #[error("failed to write {}: {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
