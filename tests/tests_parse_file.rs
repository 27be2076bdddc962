//! File-based entry point: reading, labeling diagnostics with the path, and
//! surfacing I/O failures.

use std::io::Write;

use laurel::{Diagnostic, ParserError};

#[test]
fn test_parse_file_roundtrip() {
    let source = "let x = 1;\nlet y = x * 2;\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();

    let parse = laurel::parse_file(file.path(), None).unwrap();
    assert_eq!(parse.text(), source);
}

#[test]
fn test_parse_file_labels_diagnostics_with_the_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"let x == 1\n").unwrap();

    let mut collected = Vec::new();
    let mut sink = |diag: Diagnostic| collected.push(diag);
    laurel::parse_file(file.path(), Some(&mut sink)).unwrap();

    assert_eq!(collected.len(), 1);
    let label = collected[0].location.file.as_deref().unwrap();
    assert_eq!(label, file.path().to_string_lossy());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.lau");

    let err = laurel::parse_file(&path, None).unwrap_err();
    match err {
        ParserError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
