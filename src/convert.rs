//! Pure conversion functions: TOML config + CLI overrides -> crate API config types.

use anyhow::{Result, bail};

use nearby_io::ReaderConfig;
use nearby_knn::{ClassifierConfig, ZeroRangePolicy};

use crate::cli::ZeroRangeArg;
use crate::config::{ClassifyToml, IoToml};

/// Parses a zero-range policy name string into the corresponding enum variant.
pub fn parse_zero_range(s: &str) -> Result<ZeroRangePolicy> {
    match s.to_lowercase().as_str() {
        "ignore" => Ok(ZeroRangePolicy::Ignore),
        "reject" => Ok(ZeroRangePolicy::Reject),
        other => bail!("unknown zero_range policy: {other:?}"),
    }
}

/// Parses a single-character delimiter.
pub fn parse_delimiter(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("delimiter must be a single character, got {s:?}"),
    }
}

/// Builds a `ReaderConfig` from `[io]` settings and the column count.
pub fn build_reader_config(io: &IoToml, n_columns: usize) -> Result<ReaderConfig> {
    let config = ReaderConfig::new(n_columns)
        .with_skip_header(io.skip_header)
        .with_delimiter(parse_delimiter(&io.delimiter)?);
    config.validate()?;
    Ok(config)
}

/// Builds a `ClassifierConfig` from `[classify]` settings, k, and an
/// optional CLI override of the zero-range policy.
pub fn build_classifier_config(
    classify: &ClassifyToml,
    k: usize,
    zero_range: Option<ZeroRangeArg>,
) -> Result<ClassifierConfig> {
    let policy = match zero_range {
        Some(ZeroRangeArg::Ignore) => ZeroRangePolicy::Ignore,
        Some(ZeroRangeArg::Reject) => ZeroRangePolicy::Reject,
        None => parse_zero_range(&classify.zero_range)?,
    };
    let config = ClassifierConfig::new(k).with_zero_range(policy);
    config.validate()?;
    Ok(config)
}
