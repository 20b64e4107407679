//! Integration test: reading instance files from disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use nearby_io::{IoError, ReaderConfig, read_instances};

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).expect("create file");
    f.write_all(contents.as_bytes()).expect("write file");
    path
}

#[test]
fn read_with_header() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(
        dir.path(),
        "train.csv",
        "a b label\n0.5 1.0 0\n2.0 3.5 1\n",
    );

    let instances = read_instances(&path, &ReaderConfig::new(3)).expect("read succeeds");
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].values(), &[0.5, 1.0]);
    assert_abs_diff_eq!(instances[1].label().value(), 1.0);
}

#[test]
fn read_without_header() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "test.csv", "1 2 0\n3 4 1\n");

    let config = ReaderConfig::new(3).with_skip_header(false);
    let instances = read_instances(&path, &config).expect("read succeeds");
    assert_eq!(instances.len(), 2);
}

#[test]
fn blank_lines_and_crlf_are_tolerated() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(
        dir.path(),
        "train.csv",
        "\r\nheader\r\n1 2 0\r\n\r\n   \r\n3 4 1\r\n",
    );

    let instances = read_instances(&path, &ReaderConfig::new(3)).expect("read succeeds");
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[1].values(), &[3.0, 4.0]);
}

#[test]
fn file_not_found() {
    let path = Path::new("/tmp/nearby_test_nonexistent_file.csv");
    let err = read_instances(path, &ReaderConfig::new(3)).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn invalid_config_rejects_early() {
    let path = Path::new("/tmp/nearby_test_nonexistent_file.csv");
    let err = read_instances(path, &ReaderConfig::new(1)).unwrap_err();
    assert!(
        matches!(err, IoError::InvalidConfig { .. }),
        "expected InvalidConfig, got {err:?}",
    );
}

#[test]
fn bad_row_reports_line_number() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "train.csv", "h\n1 2 0\n1 x 0\n3 4 1\n");

    let err = read_instances(&path, &ReaderConfig::new(3)).unwrap_err();
    assert!(
        matches!(&err, IoError::InvalidNumber { line: 3, token } if token == "x"),
        "got {err:?}"
    );
}

#[test]
fn wrong_column_count_is_fatal() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "train.csv", "h\n1 2 0\n1 2\n");

    let err = read_instances(&path, &ReaderConfig::new(3)).unwrap_err();
    assert!(matches!(
        err,
        IoError::ColumnCount {
            line: 3,
            expected: 3,
            got: 2
        }
    ));
}

#[test]
fn header_only_is_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "train.csv", "x y label\n");

    let err = read_instances(&path, &ReaderConfig::new(3)).unwrap_err();
    assert!(matches!(err, IoError::Empty { .. }), "got {err:?}");
}

#[test]
fn non_utf8_is_csv_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("binary.csv");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x31]).expect("write file");

    let err = read_instances(&path, &ReaderConfig::new(3)).unwrap_err();
    assert!(matches!(err, IoError::Csv { .. }), "got {err:?}");
}

#[test]
fn quoted_fields_are_unquoted() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "train.csv", "\"a b label\"\n\"1 2 0\"\n\"3 4 1\"\n");

    let instances = read_instances(&path, &ReaderConfig::new(3)).expect("read succeeds");
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].values(), &[1.0, 2.0]);
    assert_eq!(instances[1].label().value(), 1.0);
}

#[test]
fn quoted_field_may_contain_delimiter() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(
        dir.path(),
        "train.csv",
        "h\n\"1 2 0\",note\n3 4 1,\"x, y\"\n",
    );

    let instances = read_instances(&path, &ReaderConfig::new(3)).expect("read succeeds");
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].values(), &[1.0, 2.0]);
    assert_eq!(instances[1].values(), &[3.0, 4.0]);
}

#[test]
fn only_first_field_is_used() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "train.csv", "h,extra\n1 2 0,ignored,9 9 9\n3 4 1\n");

    let instances = read_instances(&path, &ReaderConfig::new(3)).expect("read succeeds");
    assert_eq!(instances[0].values(), &[1.0, 2.0]);
    assert_eq!(instances[0].label().value(), 0.0);
    assert_eq!(instances[1].values(), &[3.0, 4.0]);
}

#[test]
fn custom_delimiter() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "train.txt", "4 1;x\n5 0;1,2\n");

    let config = ReaderConfig::new(2)
        .with_skip_header(false)
        .with_delimiter(';');
    let instances = read_instances(&path, &config).expect("read succeeds");
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].values(), &[4.0]);
    assert_eq!(instances[1].label().value(), 0.0);
}
