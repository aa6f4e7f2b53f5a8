use sure::io::csv_io::{self, CsvIoError};

#[test]
fn test_load_csv_basic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("basic.csv");
    std::fs::write(&path, "ID,NAME\nU1,Alpha\nU2,Beta\n").unwrap();

    let table = csv_io::load_csv(&path).unwrap();
    assert_eq!(table.headers, vec!["ID", "NAME"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["U1", "Alpha"]);
    assert_eq!(table.rows[1], vec!["U2", "Beta"]);
}

#[test]
fn test_load_csv_short_rows_padded_to_header_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.csv");
    std::fs::write(&path, "ID,NAME,CLASSIFICATION\nU1,Alpha\n").unwrap();

    let table = csv_io::load_csv(&path).unwrap();
    assert_eq!(table.rows[0], vec!["U1", "Alpha", ""]);
}

#[test]
fn test_load_csv_long_rows_truncated_to_header_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.csv");
    std::fs::write(&path, "ID,NAME\nU1,Alpha,extra,fields\n").unwrap();

    let table = csv_io::load_csv(&path).unwrap();
    assert_eq!(table.rows[0], vec!["U1", "Alpha"]);
}

#[test]
fn test_load_csv_keeps_all_empty_rows() {
    // A record of empty fields is not silently dropped at parse time;
    // discarding keyless rows is the dataset layer's job.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empties.csv");
    std::fs::write(&path, "ID,NAME\n,\nU2,Beta\n").unwrap();

    let table = csv_io::load_csv(&path).unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["", ""]);
    assert_eq!(table.rows[1], vec!["U2", "Beta"]);
}

#[test]
fn test_load_csv_quoted_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quoted.csv");
    std::fs::write(&path, "ID,NAME\nU1,\"Alpha, with comma\"\n").unwrap();

    let table = csv_io::load_csv(&path).unwrap();
    assert_eq!(table.rows[0], vec!["U1", "Alpha, with comma"]);
}

#[test]
fn test_load_csv_strips_header_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.csv");
    std::fs::write(&path, "\u{feff}ID,NAME\nU1,Alpha\n").unwrap();

    let table = csv_io::load_csv(&path).unwrap();
    assert_eq!(table.headers, vec!["ID", "NAME"]);
}

#[test]
fn test_load_csv_file_not_found() {
    let path = std::path::Path::new("/nonexistent/path/data.csv");
    let err = csv_io::load_csv(path).unwrap_err();
    assert!(matches!(err, CsvIoError::Io(_)));
}

#[test]
fn test_load_csv_empty_file_is_missing_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let err = csv_io::load_csv(&path).unwrap_err();
    assert!(matches!(err, CsvIoError::MissingHeader));
}

#[test]
fn test_load_csv_invalid_utf8_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, b"ID,NAME\nU1,\xff\xfe\n").unwrap();

    let err = csv_io::load_csv(&path).unwrap_err();
    assert!(matches!(err, CsvIoError::Parse(_)));
}
