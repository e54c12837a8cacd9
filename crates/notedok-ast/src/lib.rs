//! notedok-ast - Block model for tagged lecture notes
//!
//! This crate provides the types produced by the notedok segmenter and
//! consumed by its emitters: the closed vocabulary of note blocks, the
//! segmented document, and the flashcard pair.

pub mod block;
pub mod card;
pub mod notes;

// Re-export main types
pub use block::{Block, Environment, EnvironmentKind, Figure};
pub use card::Card;
pub use notes::Notes;

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
