//! Metadata file handling for cfgmeta
//!
//! This module contains:
//! - [`marker`]: resolution of the metadata (marker) file name
//! - [`openapi`]: the YAML metadata file holding setter and substitution definitions
//!
//! Extraction talks to metadata files through the [`MetadataStore`] trait.

pub mod marker;
pub mod openapi;

use std::path::Path;

use crate::domain::{SetterRecord, SubstitutionRecord};
use crate::error::Result;

pub use marker::resolve_marker_file_name;
pub use openapi::OpenApiFile;

/// Read access to the records declared in one metadata file
///
/// Records are returned in authoring order. Setter `count` fields are left at
/// zero; usage counting belongs to extraction.
pub trait MetadataStore: Sized {
    /// Open and fully read the metadata file at `path`
    fn open(path: &Path) -> Result<Self>;

    fn setters(&self) -> &[SetterRecord];

    fn substitutions(&self) -> &[SubstitutionRecord];
}
