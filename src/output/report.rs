//! Per-run capture report

use std::io::{self, Write};
use std::path::PathBuf;

/// How one view's capture ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Fixture written to this path
    Saved(PathBuf),
    /// Markup was captured but could not be written; the crawl continued
    WriteFailed(String),
}

/// One attempted view capture
#[derive(Debug, Clone)]
pub struct ViewCapture {
    pub name: String,
    pub url: String,
    pub outcome: CaptureOutcome,
}

/// Ordered record of every attempted capture in a crawl run
#[derive(Debug, Clone, Default)]
pub struct CaptureReport {
    captures: Vec<ViewCapture>,
}

impl CaptureReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, capture: ViewCapture) {
        self.captures.push(capture);
    }

    pub fn captures(&self) -> &[ViewCapture] {
        &self.captures
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    pub fn saved_count(&self) -> usize {
        self.captures
            .iter()
            .filter(|c| matches!(c.outcome, CaptureOutcome::Saved(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.captures.len() - self.saved_count()
    }

    /// Writes the operator-facing success/failure summary
    pub fn write_summary(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(
            w,
            "Capture summary: {} saved, {} failed",
            self.saved_count(),
            self.failed_count()
        )?;
        for capture in &self.captures {
            match &capture.outcome {
                CaptureOutcome::Saved(path) => {
                    writeln!(w, "  saved  {} -> {}", capture.name, path.display())?
                }
                CaptureOutcome::WriteFailed(reason) => {
                    writeln!(w, "  FAILED {}: {}", capture.name, reason)?
                }
            }
        }
        Ok(())
    }

    /// Prints the summary to stdout
    pub fn print_summary(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_summary(&mut lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(name: &str) -> ViewCapture {
        ViewCapture {
            name: name.to_string(),
            url: format!("http://localhost:8000/{}/", name),
            outcome: CaptureOutcome::Saved(PathBuf::from(format!("/out/{}.html", name))),
        }
    }

    fn failed(name: &str, reason: &str) -> ViewCapture {
        ViewCapture {
            name: name.to_string(),
            url: format!("http://localhost:8000/{}/", name),
            outcome: CaptureOutcome::WriteFailed(reason.to_string()),
        }
    }

    #[test]
    fn test_counts() {
        let mut report = CaptureReport::new();
        report.push(saved("landing"));
        report.push(failed("login", "permission denied"));
        report.push(saved("signup"));

        assert_eq!(report.saved_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_summary_lists_failures() {
        let mut report = CaptureReport::new();
        report.push(saved("landing"));
        report.push(failed("login", "permission denied"));

        let mut buf = Vec::new();
        report.write_summary(&mut buf).unwrap();
        let summary = String::from_utf8(buf).unwrap();

        assert!(summary.contains("1 saved, 1 failed"));
        assert!(summary.contains("saved  landing"));
        assert!(summary.contains("FAILED login: permission denied"));
    }

    #[test]
    fn test_empty_report() {
        let report = CaptureReport::new();
        assert!(report.is_empty());
        assert_eq!(report.saved_count(), 0);
        assert_eq!(report.failed_count(), 0);
    }
}
