use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Reporter;
use crate::dispatch::FileReport;
use crate::error::Result;
use crate::ScanSummary;

#[derive(Serialize)]
struct JsonReport<'a> {
    target: &'a Path,
    files: &'a [FileReport],
    summary: &'a ScanSummary,
}

/// Collects every file with advisories and writes one JSON document at the end.
pub struct JsonReporter<W: Write> {
    out: W,
    target: PathBuf,
    files: Vec<FileReport>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            target: PathBuf::new(),
            files: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn begin(&mut self, target: &Path) -> Result<()> {
        self.target = target.to_path_buf();
        Ok(())
    }

    fn file(&mut self, report: &FileReport) -> Result<()> {
        if report.has_advisories() {
            self.files.push(report.clone());
        }
        Ok(())
    }

    fn finish(&mut self, summary: &ScanSummary) -> Result<()> {
        let report = JsonReport {
            target: &self.target,
            files: &self.files,
            summary,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::FileCategory;
    use crate::rules::Advisory;

    #[test]
    fn writes_only_files_with_advisories() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.begin(Path::new("site")).unwrap();
        reporter
            .file(&FileReport {
                path: PathBuf::from("site/app.js"),
                category: FileCategory::Script,
                advisories: vec![Advisory::new("fetch() used")],
            })
            .unwrap();
        reporter
            .file(&FileReport {
                path: PathBuf::from("site/clean.css"),
                category: FileCategory::Stylesheet,
                advisories: vec![],
            })
            .unwrap();
        reporter.finish(&ScanSummary::default()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
        assert_eq!(value["target"], "site");
        assert_eq!(value["files"].as_array().unwrap().len(), 1);
        assert_eq!(value["files"][0]["category"], "script");
        assert_eq!(value["files"][0]["advisories"][0], "fetch() used");
    }
}
