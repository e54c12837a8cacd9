//! Error types for note compilation

use std::path::PathBuf;

use thiserror::Error;

/// Result type for note compilation
pub type Result<T> = std::result::Result<T, NotesError>;

/// Errors that can occur while compiling notes
#[derive(Error, Debug)]
pub enum NotesError {
    /// A figure block referenced a number with no asset file on disk
    #[error("Missing figure file: {}/{}.(png|pdf|svg)", .dir.display(), .number)]
    MissingFigure {
        /// The figure number that failed to resolve
        number: String,
        /// The asset directory that was probed
        dir: PathBuf,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_figure_display() {
        let err = NotesError::MissingFigure {
            number: "7".to_string(),
            dir: PathBuf::from("figures"),
        };
        assert_eq!(
            err.to_string(),
            "Missing figure file: figures/7.(png|pdf|svg)"
        );
    }
}
