//! Version command implementation
//!
//! Besides the version, prints the metadata conventions this build reads so
//! bug reports carry them.

use std::fmt::Write;

use crate::common::ref_normalizer::{SETTER_DEFINITION_PREFIX, SUBSTITUTION_DEFINITION_PREFIX};
use crate::config::marker::{DEFAULT_OPENAPI_FILE, OPENAPI_FILE_ENV};
use crate::error::Result;
use crate::operations::list_setters::usage::REFERENCE_KEYS;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_text());
    Ok(())
}

fn version_text() -> String {
    let mut text = format!("cfgmeta {}\n\n", env!("CARGO_PKG_VERSION"));

    text.push_str("Metadata:\n");
    let _ = writeln!(
        text,
        "  File: {DEFAULT_OPENAPI_FILE} (override with --openapi-file or {OPENAPI_FILE_ENV})"
    );
    let _ = writeln!(text, "  Reference comments: {}", REFERENCE_KEYS.join(", "));
    let _ = writeln!(
        text,
        "  Definition prefixes: {SETTER_DEFINITION_PREFIX}, {SUBSTITUTION_DEFINITION_PREFIX}"
    );

    text.push_str("\nBuild:\n");
    let _ = writeln!(text, "  MSRV: {}", env!("CARGO_PKG_RUST_VERSION"));
    let _ = writeln!(
        text,
        "  Profile: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );

    text
}
