pub mod console;
pub mod json;

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::dispatch::FileReport;
use crate::error::Result;
use crate::ScanSummary;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

/// Receives scan results as they are produced, one file at a time.
pub trait Reporter {
    /// Called once, after the target resolved and before any file is scanned.
    fn begin(&mut self, target: &Path) -> Result<()>;

    /// Called for every supported file, including files with no advisories.
    fn file(&mut self, report: &FileReport) -> Result<()>;

    /// Called once after the last file.
    fn finish(&mut self, summary: &ScanSummary) -> Result<()>;
}

/// Build a reporter for `format` writing to `out`.
pub fn reporter<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn Reporter + 'a> {
    match format {
        OutputFormat::Console => Box::new(console::ConsoleReporter::new(out)),
        OutputFormat::Json => Box::new(json::JsonReporter::new(out)),
    }
}
