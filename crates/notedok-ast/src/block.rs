//! Block-level elements of a segmented note document
//!
//! A block is a maximal run of lines introduced by one recognized tag
//! together with its unlabeled continuation lines. The tag vocabulary is
//! closed, so rendering dispatches over an exhaustive match rather than
//! string comparison.

use serde::{Deserialize, Serialize};

/// A segmented note block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A section heading (`S:`)
    Section(String),
    /// A subsection heading (`SS:`)
    Subsection(String),
    /// An opening pre-section environment (`PRE:`)
    PreSection(String),
    /// An opening post-section environment (`POST:`)
    PostSection(String),
    /// A begin/body/end environment (`TH:`, `LM:`, `CO:`, `EX:`, `NOTE:`, `E:`, `R:`)
    Environment(Environment),
    /// A numbered figure with caption (`FIG <n>:`)
    Figure(Figure),
    /// A flashcard question (`Q:`)
    Question(String),
    /// A flashcard answer (`A:`)
    Answer(String),
}

/// An environment block: content wrapped in a named begin/end pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Which environment the tag opened
    pub kind: EnvironmentKind,
    /// Environment body, emitted verbatim
    pub body: String,
}

/// Environment kind variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentKind {
    Theorem,
    Lemma,
    Corollary,
    Exercise,
    Note,
    Equation,
    Derivation,
}

/// A figure block referencing an on-disk asset by number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Numeric asset name, e.g. `"3"` for `figures/3.png`
    pub number: String,
    /// Caption text
    pub caption: String,
}

impl Environment {
    /// Create an environment block
    pub fn new(kind: EnvironmentKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }
}

impl Figure {
    /// Create a figure block
    pub fn new(number: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            caption: caption.into(),
        }
    }
}
