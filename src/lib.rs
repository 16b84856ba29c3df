//! Kindlefy: compatibility linter for the Kindle WebBrowser.
//!
//! Walks a file or directory, runs lexical rule scans over `.js`, `.ts`,
//! `.html` and `.css` files, and reports constructs that the old WebKit
//! builds on Kindle e-readers are known to mishandle.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use kindlefy::output::console::ConsoleReporter;
//!
//! let mut reporter = ConsoleReporter::new(std::io::stdout());
//! let summary = kindlefy::scan(Path::new("./web"), &mut reporter).unwrap();
//! println!("{} advisories", summary.advisories);
//! ```

pub mod category;
pub mod dispatch;
pub mod error;
pub mod knowledge;
pub mod output;
pub mod rules;
pub mod walk;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub use category::FileCategory;
pub use dispatch::{scan_file, scan_text, FileReport};
use error::{KindlefyError, Result};
use output::Reporter;
pub use rules::Advisory;

/// Counters for one scan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Files discovered under the target.
    pub files_seen: usize,
    /// Files with a supported extension.
    pub files_scanned: usize,
    pub files_with_advisories: usize,
    pub advisories: usize,
}

/// Resolve `target` into the list of files to dispatch: the file itself, or
/// every file beneath it when it is a directory.
pub fn resolve_target(target: &Path) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(target).map_err(|source| KindlefyError::Path {
        path: target.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        walk::collect_files(target)
    } else {
        Ok(vec![target.to_path_buf()])
    }
}

/// Run a complete scan, handing each file's result to `reporter` as soon as
/// it is ready. The first error aborts the run.
pub fn scan(target: &Path, reporter: &mut dyn Reporter) -> Result<ScanSummary> {
    let files = resolve_target(target)?;
    let mut summary = ScanSummary {
        files_seen: files.len(),
        ..Default::default()
    };

    reporter.begin(target)?;

    for path in &files {
        let Some(report) = dispatch::scan_file(path)? else {
            continue;
        };
        summary.files_scanned += 1;
        if report.has_advisories() {
            summary.files_with_advisories += 1;
            summary.advisories += report.advisories.len();
        }
        reporter.file(&report)?;
    }

    reporter.finish(&summary)?;

    tracing::info!(
        target = %target.display(),
        seen = summary.files_seen,
        scanned = summary.files_scanned,
        flagged = summary.files_with_advisories,
        "scan finished"
    );

    Ok(summary)
}
