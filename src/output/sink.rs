//! Capture sink: deterministic output paths and overwriting writes

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Persists captured markup to `<project_root>/<test_path>/<html_path>/`
///
/// Writes overwrite any existing file of the same name without confirmation;
/// capture is meant to be re-run repeatedly to refresh fixtures. Directory
/// creation is a precondition, not this component's responsibility.
#[derive(Debug, Clone)]
pub struct CaptureSink {
    dir: PathBuf,
}

impl CaptureSink {
    pub fn new(
        project_root: impl AsRef<Path>,
        test_path: impl AsRef<Path>,
        html_path: impl AsRef<Path>,
    ) -> Self {
        Self {
            dir: project_root.as_ref().join(test_path).join(html_path),
        }
    }

    /// The directory all fixtures land in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The deterministic output path for a view
    pub fn path_for(&self, view_name: &str) -> PathBuf {
        self.dir.join(format!("{}.html", view_name))
    }

    /// Writes one captured page, overwriting any previous fixture
    pub fn write(&self, view_name: &str, html: &str) -> io::Result<PathBuf> {
        let path = self.path_for(view_name);
        fs::write(&path, html)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_deterministic() {
        let sink = CaptureSink::new("/project", "doc/test", "generated");
        assert_eq!(
            sink.path_for("landing"),
            PathBuf::from("/project/doc/test/generated/landing.html")
        );
    }

    #[test]
    fn test_write_creates_file() {
        let root = tempfile::tempdir().unwrap();
        let sink = CaptureSink::new(root.path(), "", "");

        let path = sink.write("landing", "<html>landing</html>").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<html>landing</html>");
    }

    #[test]
    fn test_write_overwrites_existing_fixture() {
        let root = tempfile::tempdir().unwrap();
        let sink = CaptureSink::new(root.path(), "", "");

        let first = sink.write("landing", "old").unwrap();
        let second = sink.write("landing", "new").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(second).unwrap(), "new");
    }

    #[test]
    fn test_write_into_missing_directory_errors() {
        let root = tempfile::tempdir().unwrap();
        let sink = CaptureSink::new(root.path(), "doc/test", "generated");

        // Directory creation is a precondition; its absence surfaces as an
        // io error rather than being papered over.
        assert!(sink.write("landing", "<html></html>").is_err());
    }
}
