//! List-setters command implementation
//!
//! Resolves the metadata file name, runs the report against stdout, and turns
//! the run's status into the process exit code.

use std::io::Write;
use std::process::ExitCode;

use crate::cli::ListSettersArgs;
use crate::config::resolve_marker_file_name;
use crate::error::Result;
use crate::operations::{ListOptions, ListSettersOperation, ListStatus};

/// Run list-setters command
pub fn run(openapi_file: Option<&str>, args: &ListSettersArgs) -> Result<ExitCode> {
    let marker_file = resolve_marker_file_name(openapi_file)?;
    let operation = ListSettersOperation::new(ListOptions::new(marker_file, args));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let status = operation.execute(&args.dir, &mut out)?;
    out.flush()?;

    if let ListStatus::Found { setters } = status {
        tracing::debug!("{} setter row(s) listed", setters);
    }

    if fails_run(status, args.fail_on_empty) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Whether `status` should end the process with a non-zero code
fn fails_run(status: ListStatus, fail_on_empty: bool) -> bool {
    fail_on_empty && status == ListStatus::NoResults
}
