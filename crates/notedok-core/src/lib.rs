//! notedok-core - Plain text lecture notes, compiled
//!
//! Core library for notedok: segments tagged note text into blocks and
//! renders them as a LaTeX body and a flashcard export.
//!
//! # Example
//!
//! ```
//! use notedok_core::{emit_cards, emit_latex, segment};
//!
//! let notes = segment(
//!     "F25-L5\nS: Kinematics\nQ: What is velocity?\nA: Rate of change of position.",
//! );
//! assert_eq!(notes.lecture.as_deref(), Some("F25-L5"));
//!
//! let latex = emit_latex(&notes).unwrap();
//! assert!(latex.contains("\\section{Kinematics}"));
//!
//! let cards = emit_cards(&notes.blocks);
//! assert_eq!(cards.len(), 1);
//! ```

pub mod cards;
pub mod error;
pub mod figures;
pub mod latex;
pub mod segmenter;

// Re-export main types and functions
pub use cards::{cards_to_tsv, emit_cards};
pub use error::{NotesError, Result};
pub use figures::{FigureDir, EXTENSIONS, FIGURES_DIR};
pub use latex::{emit_latex, emit_latex_with_config, LatexConfig, LatexEmitter};
pub use segmenter::segment;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
