//! Descriptor discovery.
//!
//! Finds build descriptors anywhere beneath a root directory.

use crate::core::PomError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively finds files named exactly `file_name` beneath `root`.
///
/// Entries are visited depth-first with each directory's entries sorted by file name,
/// so the result order is stable across runs and platforms. Symlinks are not
/// followed. Unreadable subdirectories are logged and skipped.
///
/// # Errors
///
/// [`PomError::RootNotFound`] when `root` is missing or not a directory.
///
/// # Examples
///
/// ```rust,no_run
/// use pomdeps_cli::utils::fs::find_descriptors;
/// use std::path::Path;
///
/// # fn example() -> Result<(), pomdeps_cli::core::PomError> {
/// let poms = find_descriptors(Path::new("."), "pom.xml")?;
/// # Ok(())
/// # }
/// ```
pub fn find_descriptors(root: &Path, file_name: &str) -> Result<Vec<PathBuf>, PomError> {
    if !root.is_dir() {
        return Err(PomError::RootNotFound {
            path: root.display().to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && entry.file_name() == file_name {
            files.push(entry.into_path());
        }
    }

    tracing::debug!("Found {} {} files under {}", files.len(), file_name, root.display());
    Ok(files)
}
