//! Input errors. Grammar non-matches are never errors.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    /// File could not be read
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory scan of something that is not a directory
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Traversal failed below the root
    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ScanError {
    /// Path the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Io { path, .. }
            | ScanError::NotADirectory { path }
            | ScanError::Walk { path, .. } => path,
        }
    }
}
