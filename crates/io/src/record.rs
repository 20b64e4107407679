//! Pure parsing of one record field into an instance.

use nearby_knn::Instance;

use crate::error::IoError;
use crate::reader::ReaderConfig;

/// Parses the first field of a record into an [`Instance`].
///
/// `field` must hold exactly `config.n_columns()` whitespace-separated
/// numbers: the last is the label and the rest are feature values. `line` is
/// the 1-based line number used in error messages.
///
/// # Errors
///
/// - [`IoError::InvalidNumber`] for the first token that is not a number.
/// - [`IoError::ColumnCount`] if the token count is not `n_columns`.
/// - [`IoError::Instance`] if a value is NaN or infinite.
///
/// # Example
///
/// ```
/// use nearby_io::{ReaderConfig, parse_record};
///
/// let config = ReaderConfig::new(3);
/// let inst = parse_record("0.5 1.5 2", 2, &config).unwrap();
/// assert_eq!(inst.values(), &[0.5, 1.5]);
/// assert_eq!(inst.label().value(), 2.0);
/// ```
pub fn parse_record(field: &str, line: usize, config: &ReaderConfig) -> Result<Instance, IoError> {
    let mut values = field
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| IoError::InvalidNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, IoError>>()?;

    if values.len() != config.n_columns() {
        return Err(IoError::ColumnCount {
            line,
            expected: config.n_columns(),
            got: values.len(),
        });
    }

    // n_columns >= 2 is validated, so a label is always present
    let label = values.pop().unwrap_or_default();
    Instance::new(values, label).map_err(|source| IoError::Instance { line, source })
}
