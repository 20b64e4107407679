//! # nearby-io
//!
//! Read labeled numeric instances from delimited text files and hand them to
//! `nearby-knn` as [`Instance`](nearby_knn::Instance) values.
//!
//! Each line is a delimited record, read with the `csv` crate so quoted
//! fields are unquoted. Its first field holds whitespace-separated numbers;
//! the last number is the label and the rest are feature values. The first
//! line is a header by default.

mod error;
mod reader;
mod record;

pub use error::IoError;
pub use reader::{ReaderConfig, read_instances};
pub use record::parse_record;
