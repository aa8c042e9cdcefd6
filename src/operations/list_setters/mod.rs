//! List-setters operation module
//!
//! This module provides `ListSettersOperation` that encapsulates the report:
//! discover every package under a root, extract its setters (and optionally
//! substitutions) and print one block per package.
//!
//! Packages are processed one at a time in discovery order. Any error aborts
//! the run; blocks already written stay written.

pub mod display;
pub mod extract;
pub mod usage;

use std::io::Write;
use std::path::Path;

use crate::cli::ListSettersArgs;
use crate::config::{MetadataStore, OpenApiFile};
use crate::discovery;
use crate::domain::ResourceGroup;
use crate::error::Result;
use crate::ui::TableFormat;

/// Configuration options for list-setters
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Metadata file name marking a package directory
    pub marker_file: String,

    /// Exact-match filter applied to setter and substitution names
    pub name: Option<String>,

    pub format: TableFormat,

    pub include_substitutions: bool,
}

impl ListOptions {
    pub fn new(marker_file: String, args: &ListSettersArgs) -> Self {
        Self {
            marker_file,
            name: args.name.clone(),
            format: TableFormat::from_markdown_flag(args.markdown),
            include_substitutions: args.include_subst,
        }
    }
}

/// Terminal state of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// At least one setter row was printed across all packages
    Found { setters: usize },
    /// Packages were found but none had a matching setter
    NoResults,
}

/// High-level list-setters operation
pub struct ListSettersOperation {
    options: ListOptions,
}

impl ListSettersOperation {
    pub fn new(options: ListOptions) -> Self {
        Self { options }
    }

    /// Execute the report for every package under `root`, writing to `out`
    pub fn execute<W: Write>(&self, root: &Path, out: &mut W) -> Result<ListStatus> {
        self.execute_with::<OpenApiFile, W>(root, out)
    }

    fn execute_with<S: MetadataStore, W: Write>(
        &self,
        root: &Path,
        out: &mut W,
    ) -> Result<ListStatus> {
        let dirs = discovery::sub_dirs_with_file(root, &self.options.marker_file)?;

        let mut total_setters = 0;
        for dir in &dirs {
            let group = self.list_package::<S, W>(dir, out)?;
            total_setters += group.setters.len();
        }

        tracing::debug!(
            "Listed {} setter(s) across {} package(s)",
            total_setters,
            dirs.len()
        );

        if total_setters == 0 {
            Ok(ListStatus::NoResults)
        } else {
            Ok(ListStatus::Found {
                setters: total_setters,
            })
        }
    }

    /// Print the block for one package and return what was extracted
    fn list_package<S: MetadataStore, W: Write>(
        &self,
        dir: &Path,
        out: &mut W,
    ) -> Result<ResourceGroup> {
        let mut group = ResourceGroup::new(dir, &self.options.marker_file);
        writeln!(out, "{}", group.display_path())?;

        let extracted =
            extract::extract::<S>(&group.metadata_path, self.options.name.as_deref())?;
        group.setters = extracted.setters;
        group.substitutions = extracted.substitutions;

        out.write_all(display::setters_table(&group.setters, self.options.format).as_bytes())?;
        if self.options.include_substitutions {
            out.write_all(
                display::substitutions_table(&group.substitutions, self.options.format)
                    .as_bytes(),
            )?;
        }

        Ok(group)
    }
}
