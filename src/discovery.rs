//! Package discovery
//!
//! A package is any directory that directly contains the marker (metadata)
//! file. Discovery walks the whole tree below the root, so nested packages are
//! reported alongside their parents.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{CfgMetaError, Result, fs};

/// Find every file named `marker_file` below `root`
///
/// Entries that cannot be read are skipped; only an unreadable `root` fails.
pub fn find_marker_file_locations(root: &Path, marker_file: &str) -> Result<Vec<PathBuf>> {
    std::fs::read_dir(root).map_err(|e| fs::from_io(root, &e))?;

    let locations = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| !e.file_type().is_dir() && e.file_name() == marker_file)
        .map(walkdir::DirEntry::into_path)
        .collect();

    Ok(locations)
}

/// Directories below `root` that directly contain `marker_file`, sorted by path
///
/// Fails with [`CfgMetaError::MarkerFileNotFound`] when there are none.
pub fn sub_dirs_with_file(root: &Path, marker_file: &str) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = find_marker_file_locations(root, marker_file)?
        .into_iter()
        .filter_map(|location| location.parent().map(Path::to_path_buf))
        .collect();

    if dirs.is_empty() {
        return Err(CfgMetaError::MarkerFileNotFound {
            file: marker_file.to_string(),
            root: root.display().to_string(),
        });
    }

    dirs.sort();
    dirs.dedup();
    tracing::debug!(
        "Found {} package(s) with {} under {}",
        dirs.len(),
        marker_file,
        root.display()
    );

    Ok(dirs)
}
