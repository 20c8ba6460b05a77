//! Error type shared by the generator, the suite reader and the binaries

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// The requested test-case count is unusable
    #[error("invalid test-case count '{input}': {reason}")]
    InvalidCount { input: String, reason: String },

    /// The generator's size range is empty or exceeds the harness limit
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a suite file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A suite file does not follow the harness input format
    #[error("malformed suite at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A harness output file holds a different number of cases than its suite
    #[error("harness output has {found} test cases, suite has {expected}")]
    CaseCountMismatch { expected: usize, found: usize },

    /// Operands handed to the reference kernel differ in length
    #[error("vector lengths differ: a has {a} elements, b has {b}")]
    LengthMismatch { a: usize, b: usize },
}

impl GenError {
    /// Wraps an `io::Error` together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        GenError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, GenError>;
