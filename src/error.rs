use std::io;

use thiserror::Error;

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

/// Failure modes of a generation run. Every variant is fatal; the run
/// aborts on the first error with no per-line recovery.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed mapping on line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}
