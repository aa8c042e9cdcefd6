//! Marker file name resolution
//!
//! The marker file is the metadata file whose presence makes a directory a
//! reportable package.

use crate::error::{Result, config};

/// Marker file name used when none is configured
pub const DEFAULT_OPENAPI_FILE: &str = "Krmfile";

/// Environment variable overriding the marker file name
pub const OPENAPI_FILE_ENV: &str = "CFGMETA_OPENAPI_FILE";

/// Resolve the marker file name from an optional configured value
///
/// The name must be a bare file name: non-empty, no path separators, and not
/// `.` or `..`.
pub fn resolve_marker_file_name(configured: Option<&str>) -> Result<String> {
    let Some(name) = configured else {
        return Ok(DEFAULT_OPENAPI_FILE.to_string());
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(config::invalid("metadata file name must not be empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(config::invalid(format!(
            "metadata file name '{name}' must not contain a path separator"
        )));
    }
    if name == "." || name == ".." {
        return Err(config::invalid(format!(
            "metadata file name '{name}' is not a file name"
        )));
    }

    Ok(name.to_string())
}
