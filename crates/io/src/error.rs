//! Error types for nearby-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the nearby-io crate.
///
/// Every variant that concerns a data row carries its 1-based line number so
/// a bad input file can be fixed without guessing.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be opened.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when the delimited-record layer fails: bad quoting,
    /// invalid UTF-8, or an I/O error mid-file.
    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying record-reader failure.
        #[source]
        source: csv::Error,
    },

    /// Returned when a token cannot be parsed as a number.
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// Returned when a row has the wrong number of numeric tokens.
    #[error("line {line}: expected {expected} columns, got {got}")]
    ColumnCount {
        /// 1-based line number.
        line: usize,
        /// Configured number of columns (features plus label).
        expected: usize,
        /// Number of tokens found.
        got: usize,
    },

    /// Returned when a parsed row is not a valid instance.
    #[error("line {line}: {source}")]
    Instance {
        /// 1-based line number.
        line: usize,
        /// Validation failure from nearby-knn.
        #[source]
        source: nearby_knn::KnnError,
    },

    /// Returned when a file contains no data rows.
    #[error("no data rows in {}", path.display())]
    Empty {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// Returned when the reader configuration is invalid.
    #[error("invalid reader config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
