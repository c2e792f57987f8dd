//! Errors raised while building an index.
//!
//! Lookups never fail: a word that is not indexed is an empty result. Only
//! building can go wrong, and when it does the previously published index
//! stays in place.

use std::io;
use thiserror::Error;

/// A file whose contents could not be read during ingestion
#[derive(Debug)]
pub struct ReadFailure {
    pub path: String,
    pub error: io::Error,
}

impl std::fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    /// The file tree could not be listed
    #[error("failed to enumerate files: {0}")]
    Enumerate(#[source] io::Error),

    /// One or more files could not be read and the build was configured to abort
    #[error("{} file(s) could not be read, first: {}", .failures.len(), first_failure(.failures))]
    Unreadable { failures: Vec<ReadFailure> },
}

fn first_failure(failures: &[ReadFailure]) -> String {
    failures
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl BuildError {
    /// Paths of the files that failed to read, if any
    pub fn failed_paths(&self) -> Vec<&str> {
        match self {
            BuildError::Enumerate(_) => Vec::new(),
            BuildError::Unreadable { failures } => {
                failures.iter().map(|f| f.path.as_str()).collect()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
