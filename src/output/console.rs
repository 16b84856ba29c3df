use std::io::Write;
use std::path::Path;

use colored::{Color, Colorize};

use super::Reporter;
use crate::dispatch::FileReport;
use crate::error::Result;
use crate::ScanSummary;

pub const START_BANNER: &str = "Kindlefy - scanning for Kindle WebBrowser quirks...";
pub const DONE_BANNER: &str = "Scan complete.";

/// Colored, human-readable output. Files without advisories print nothing.
pub struct ConsoleReporter<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// Color follows the `colored` crate's global control
    /// (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`).
    pub fn new(out: W) -> Self {
        Self { out, colored: true }
    }

    pub fn without_color(mut self) -> Self {
        self.colored = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn begin(&mut self, _target: &Path) -> Result<()> {
        let line = self.paint(START_BANNER, Color::Magenta);
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn file(&mut self, report: &FileReport) -> Result<()> {
        if !report.has_advisories() {
            return Ok(());
        }

        let header = self.paint(&format!("File: {}", report.path.display()), Color::Blue);
        writeln!(self.out, "\n{header}")?;
        for advisory in &report.advisories {
            let line = self.paint(&format!("• {advisory}"), Color::Yellow);
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn finish(&mut self, _summary: &ScanSummary) -> Result<()> {
        let line = self.paint(DONE_BANNER, Color::Green);
        writeln!(self.out, "\n{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::FileCategory;
    use crate::rules::Advisory;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn report(path: &str, messages: &[&str]) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            category: FileCategory::Script,
            advisories: messages.iter().map(|m| Advisory::new(*m)).collect(),
        }
    }

    fn render(reports: &[FileReport]) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new()).without_color();
        reporter.begin(Path::new(".")).unwrap();
        for r in reports {
            reporter.file(r).unwrap();
        }
        reporter.finish(&ScanSummary::default()).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn banners_only_when_nothing_found() {
        assert_eq!(
            render(&[report("clean.js", &[])]),
            format!("{START_BANNER}\n\n{DONE_BANNER}\n")
        );
    }

    #[test]
    fn header_then_advisories_in_order() {
        let out = render(&[report("a.js", &["first", "second"])]);
        assert_eq!(
            out,
            format!("{START_BANNER}\n\nFile: a.js\n• first\n• second\n\n{DONE_BANNER}\n")
        );
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let out = render(&[report("a.js", &["first"])]);
        assert!(!out.contains('\u{1b}'));
    }
}
