use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Collect every regular file under `root`, at any depth.
///
/// Symlinks are followed; a link cycle surfaces as a walk error rather than
/// recursing forever. Entries are sorted by name within each directory.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), count = files.len(), "collected files");
    Ok(files)
}
