// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

use std::io;

use folio::catalog::Catalog;
use folio::error::FolioError;
use tempfile::TempDir;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let folio_error: FolioError = io_error.into();

    match folio_error {
        FolioError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_config_error_display() {
    let error = FolioError::Config("sample window is zero".to_string());
    assert_eq!(error.to_string(), "Configuration error: sample window is zero");
}

#[test]
fn test_invalid_input_display() {
    let error = FolioError::InvalidInput("--pixel-ratio must be positive".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid input: --pixel-ratio must be positive"
    );
}

#[test]
fn test_missing_catalog_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Catalog::load(&temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(FolioError::Io(_))));
}

#[test]
fn test_unsupported_catalog_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("works.csv");
    std::fs::write(&path, "title,year\n").unwrap();

    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, FolioError::Catalog(_)));
    assert!(err.to_string().starts_with("Catalog error"));
}

#[test]
fn test_malformed_catalogs_map_to_format_errors() {
    assert!(matches!(
        Catalog::from_json("[{\"title\": 1"),
        Err(FolioError::Json(_))
    ));
    assert!(matches!(
        Catalog::from_yaml("- title: [unclosed"),
        Err(FolioError::Yaml(_))
    ));
    assert!(matches!(
        Catalog::from_toml("works = ["),
        Err(FolioError::Toml(_))
    ));
}

#[test]
fn test_error_debug_format() {
    let error = FolioError::Catalog("empty".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("Catalog"));
}
