// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Error types for folio
//!
//! The search and quality engines never fail on degraded input; errors only
//! surface at the edges, when settings or catalog snapshots are read.

use thiserror::Error;

/// Main error type for folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl From<serde_yaml::Error> for FolioError {
    fn from(err: serde_yaml::Error) -> Self {
        FolioError::Yaml(err.to_string())
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Toml(err.to_string())
    }
}
