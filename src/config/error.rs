// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! Configuration error types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("Unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {} is empty", path.display())]
    EmptyFile { path: PathBuf },

    #[error("Invalid format on line {line}: {content}")]
    InvalidLine { line: usize, content: String },

    #[error("Key '{key}' is not allowed. Allowed keys: {allowed}")]
    KeyNotAllowed { key: String, allowed: String },

    #[error("Missing required environment variables: {}", keys.join(", "))]
    MissingRequired { keys: Vec<String> },

    #[error("Invalid value for {key}: '{value}' - {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Parse error for {key}: {message}")]
    ParseError { key: String, message: String },
}
