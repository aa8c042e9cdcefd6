//! Resource group domain type

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use super::{SetterRecord, SubstitutionRecord};

/// One discovered package directory and the records extracted from it
#[derive(Debug, Clone)]
pub struct ResourceGroup {
    /// Directory directly containing the metadata file
    pub dir: PathBuf,

    /// Path to the metadata file inside `dir`
    pub metadata_path: PathBuf,

    pub setters: Vec<SetterRecord>,

    pub substitutions: Vec<SubstitutionRecord>,
}

impl ResourceGroup {
    pub fn new(dir: &Path, marker_file: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            metadata_path: dir.join(marker_file),
            setters: Vec::new(),
            substitutions: Vec::new(),
        }
    }

    /// Directory path with a trailing separator, as printed in report headers
    pub fn display_path(&self) -> String {
        display_dir(&self.dir)
    }
}

/// Render a directory path with exactly one trailing separator
pub fn display_dir(dir: &Path) -> String {
    let mut shown = dir.display().to_string();
    if !shown.ends_with(MAIN_SEPARATOR) && !shown.ends_with('/') {
        shown.push(MAIN_SEPARATOR);
    }
    shown
}
