//! Error types for report generation

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report already exists at {}", path.display())]
    Collision { path: PathBuf },

    #[error("rendered report still contains placeholders: {}", tokens.join(", "))]
    UnresolvedPlaceholder { tokens: Vec<String> },
}

impl ReportError {
    /// The underlying I/O error, if this is a filesystem failure
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            ReportError::CreateDir { source, .. } | ReportError::Write { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
