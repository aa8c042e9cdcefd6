//! Error types and handling for cfgmeta
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`metadata`]: Metadata file errors
//! - [`config`]: Run configuration errors

pub mod config;
pub mod fs;
pub mod metadata;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cfgmeta operations
#[derive(Error, Diagnostic, Debug)]
pub enum CfgMetaError {
    // Discovery errors
    #[error("unable to find {file} in {root}")]
    #[diagnostic(
        code(cfgmeta::discovery::marker_not_found),
        help("Check the directory, or pass --openapi-file if packages use another file name")
    )]
    MarkerFileNotFound { file: String, root: String },

    // Metadata errors
    #[error("Failed to parse metadata file: {path}: {reason}")]
    #[diagnostic(code(cfgmeta::metadata::parse_failed))]
    MetadataParseFailed { path: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(cfgmeta::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(cfgmeta::fs::not_found))]
    FileNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(cfgmeta::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CfgMetaError {
    fn from(err: std::io::Error) -> Self {
        CfgMetaError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CfgMetaError>;
