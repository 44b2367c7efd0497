//! Integration tests: hash and check real files through the handler API.

use std::path::{Path, PathBuf};

use s256_cli::config::OutputFormat;
use s256_cli::input::InputSource;

/// Write `contents` to `name` inside `dir`.
fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_hash_files_in_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(dir.path(), "first.txt", b"abc");
    let second = write_file(dir.path(), "second.bin", &[0u8; 64]);
    let sources = vec![
        InputSource::File(second.clone()),
        InputSource::File(first.clone()),
    ];

    let mut out = Vec::new();
    s256_cli::hash::hash_sources(&sources, OutputFormat::Tagged, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        format!(
            "SHA256 ({}) = f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b",
            second.display()
        )
    );
    assert_eq!(
        lines[1],
        format!(
            "SHA256 ({}) = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            first.display()
        )
    );
}

#[test]
fn test_json_lines_carry_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "sixty-three.bin", &[0xffu8; 63]);
    let mut out = Vec::new();
    s256_cli::hash::hash_sources(&[InputSource::File(path)], OutputFormat::Json, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["len"], 63);
    assert_eq!(value["digest"].as_str().unwrap().len(), 64);
}

#[test]
fn test_missing_file_fails_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let present = write_file(dir.path(), "present.txt", b"abc");
    let sources = vec![
        InputSource::File(dir.path().join("missing.bin")),
        InputSource::File(present),
    ];
    let mut out = Vec::new();
    let err = s256_cli::hash::hash_sources(&sources, OutputFormat::Hex, &mut out).unwrap_err();
    assert!(err.to_string().contains("missing.bin"));
    assert!(out.is_empty());
}

#[test]
fn test_one_file_per_group_streams_earlier_lines() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(dir.path(), "first.txt", b"abc");
    let sources = vec![
        InputSource::File(first.clone()),
        InputSource::File(dir.path().join("gone.bin")),
    ];
    let mut out = Vec::new();
    let err = s256_cli::hash::hash_sources_grouped(&sources, OutputFormat::Hex, 1, &mut out)
        .unwrap_err();
    assert!(err.to_string().contains("gone.bin"));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  {}\n",
            first.display()
        )
    );
}

#[test]
fn test_check_file_against_expected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "check.txt",
        b"The quick brown fox jumps over the lazy dog",
    );
    let source = InputSource::File(path);

    let mut out = Vec::new();
    let ok = s256_cli::check::check_source(
        &source,
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
        &mut out,
    )
    .unwrap();
    assert!(ok);

    let mut out = Vec::new();
    let ok = s256_cli::check::check_source(
        &source,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        &mut out,
    )
    .unwrap();
    assert!(!ok);
    assert!(String::from_utf8(out).unwrap().ends_with(": FAILED\n"));
}

#[test]
fn test_temp_files_are_removed_after_test() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    let path = write_file(&root, "scratch.bin", b"scratch");

    let mut out = Vec::new();
    s256_cli::hash::hash_sources(&[InputSource::File(path.clone())], OutputFormat::Hex, &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);

    drop(dir);
    assert!(!path.exists());
    assert!(!root.exists());
}
