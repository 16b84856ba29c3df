use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::category::FileCategory;
use crate::error::{KindlefyError, Result};
use crate::rules::{Advisory, RuleSet};

/// Advisories for one scanned file, in rule emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub category: FileCategory,
    pub advisories: Vec<Advisory>,
}

impl FileReport {
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }
}

/// Run the scanner for `category` over already-loaded text.
pub fn scan_text(category: FileCategory, text: &str) -> Vec<Advisory> {
    RuleSet::for_category(category).run(text)
}

/// Scan a single file. Returns `None` without touching the file when its
/// extension is not supported.
pub fn scan_file(path: &Path) -> Result<Option<FileReport>> {
    let category = FileCategory::from_path(path);
    if !category.is_supported() {
        tracing::trace!(path = %path.display(), "skipping unsupported file");
        return Ok(None);
    }

    tracing::debug!(path = %path.display(), %category, "scanning file");

    let bytes = std::fs::read(path).map_err(|source| KindlefyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    Ok(Some(FileReport {
        path: path.to_path_buf(),
        category,
        advisories: scan_text(category, &text),
    }))
}
