//! Reader configuration and file-level orchestration.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use nearby_knn::Instance;
use tracing::{debug, info};

use crate::error::IoError;
use crate::record::parse_record;

/// Configuration for reading instances from delimited text files.
///
/// `n_columns` counts every numeric token in a row, label included, so a file
/// with 13 features per instance uses `ReaderConfig::new(14)`.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Numeric tokens per row (features plus label).
    n_columns: usize,
    /// Whether the first non-blank line is a header.
    skip_header: bool,
    /// Field delimiter (ASCII); only the first field of each record is parsed.
    delimiter: char,
}

impl ReaderConfig {
    /// Creates a configuration for rows of `n_columns` numbers.
    ///
    /// Defaults: `skip_header = true`, `delimiter = ','`.
    pub fn new(n_columns: usize) -> Self {
        Self {
            n_columns,
            skip_header: true,
            delimiter: ',',
        }
    }

    /// Enable or disable skipping the header line.
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the number of numeric tokens per row.
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Returns the number of feature values per instance.
    pub fn n_features(&self) -> usize {
        self.n_columns.saturating_sub(1)
    }

    /// Returns whether the header line is skipped.
    pub fn skip_header(&self) -> bool {
        self.skip_header
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidConfig`] if `n_columns < 2` (a row needs at
    /// least one feature and a label), or the delimiter is not a single
    /// ASCII byte, is whitespace, or is the quote character.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.n_columns < 2 {
            return Err(IoError::InvalidConfig {
                reason: format!("n_columns must be >= 2, got {}", self.n_columns),
            });
        }
        if !self.delimiter.is_ascii() || self.delimiter.is_ascii_whitespace() {
            return Err(IoError::InvalidConfig {
                reason: format!(
                    "delimiter must be a non-whitespace ASCII character, got {:?}",
                    self.delimiter
                ),
            });
        }
        if self.delimiter == '"' {
            return Err(IoError::InvalidConfig {
                reason: "delimiter must not be the quote character".to_string(),
            });
        }
        Ok(())
    }
}

/// Read every data row of `path` as an [`Instance`].
///
/// The file is read as delimited records with standard double-quote
/// handling. Only the first field of each record is parsed, see
/// [`parse_record`]. Blank lines are ignored. With `skip_header` the first
/// non-blank record is dropped. Parsing stops at the first bad row; no
/// partial result is returned.
///
/// # Errors
///
/// - [`IoError::InvalidConfig`] if `config` fails validation.
/// - [`IoError::FileNotFound`] / [`IoError::Read`] if the file cannot be opened.
/// - [`IoError::Csv`] for malformed quoting or invalid UTF-8.
/// - Any row-level error from [`parse_record`].
/// - [`IoError::Empty`] if no data rows remain.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_instances(path: &Path, config: &ReaderConfig) -> Result<Vec<Instance>, IoError> {
    config.validate()?;

    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IoError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IoError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let csv_err = |source: csv::Error| IoError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        // validate() guarantees an ASCII delimiter
        .delimiter(config.delimiter() as u8)
        .has_headers(config.skip_header())
        .flexible(true)
        .from_reader(BufReader::new(file));

    if config.skip_header() {
        let header = reader.headers().map_err(csv_err)?;
        debug!(header = ?header, "skipping header");
    }

    let mut instances = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        let field = record.get(0).unwrap_or_default();
        instances.push(parse_record(field, line, config)?);
    }

    if instances.is_empty() {
        return Err(IoError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(
        n_instances = instances.len(),
        n_features = config.n_features(),
        "instances loaded"
    );
    Ok(instances)
}
