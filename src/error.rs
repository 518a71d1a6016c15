//! Error types for the ranking pipeline.

use std::{io, path::PathBuf};

/// Errors surfaced by the ranker.
///
/// Missing input files are not errors; they load as empty sources with a
/// [`LoadStatus::Missing`](crate::vectorizer::lexicon::LoadStatus) marker.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    /// Invalid argument passed to the pipeline
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Result count that is not an integer
    #[error("invalid result count {0:?}: expected an integer")]
    InvalidCount(String),

    /// Results could not be written to the output file
    #[error("failed to write results to {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using RankError.
pub type Result<T> = std::result::Result<T, RankError>;
