//! Figure asset resolution
//!
//! Figure blocks reference assets by bare number; the file lives in a
//! fixed directory and may carry any of a fixed set of extensions. The
//! extension order is part of the contract: when several candidates exist
//! the first in the list wins, so resolution stays deterministic.

use std::path::{Path, PathBuf};

use crate::error::{NotesError, Result};

/// Default asset directory, relative to the working directory
pub const FIGURES_DIR: &str = "figures";

/// Supported asset extensions, in priority order
pub const EXTENSIONS: [&str; 3] = ["png", "pdf", "svg"];

/// A directory probed for figure assets
#[derive(Debug, Clone)]
pub struct FigureDir {
    dir: PathBuf,
}

impl FigureDir {
    /// Create a resolver over the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory being probed
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Resolve a figure number to the first existing candidate file
    ///
    /// Fails if no candidate exists in any supported extension. This is a
    /// build-time integrity check: a dangling figure reference aborts the
    /// run instead of producing a broken document.
    pub fn resolve(&self, number: &str) -> Result<PathBuf> {
        for ext in EXTENSIONS {
            let candidate = self.dir.join(format!("{}.{}", number, ext));
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        Err(NotesError::MissingFigure {
            number: number.to_string(),
            dir: self.dir.clone(),
        })
    }
}

impl Default for FigureDir {
    fn default() -> Self {
        Self::new(FIGURES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_single_candidate() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("4.svg"), b"<svg/>").unwrap();

        let figures = FigureDir::new(tmp.path());
        let resolved = figures.resolve("4").unwrap();
        assert_eq!(resolved, tmp.path().join("4.svg"));
    }

    #[test]
    fn test_extension_priority() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("1.pdf"), b"%PDF").unwrap();
        fs::write(tmp.path().join("1.png"), b"\x89PNG").unwrap();

        let figures = FigureDir::new(tmp.path());
        let resolved = figures.resolve("1").unwrap();
        assert_eq!(resolved, tmp.path().join("1.png"));
    }

    #[test]
    fn test_missing_figure_is_error() {
        let tmp = TempDir::new().unwrap();
        let figures = FigureDir::new(tmp.path());

        let err = figures.resolve("9").unwrap_err();
        match err {
            NotesError::MissingFigure { number, dir } => {
                assert_eq!(number, "9");
                assert_eq!(dir, tmp.path());
            }
            other => panic!("Expected MissingFigure, got {:?}", other),
        }
    }
}
