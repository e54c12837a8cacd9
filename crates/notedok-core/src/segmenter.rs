//! Note Segmenter
//!
//! This module splits raw note text into a `notedok_ast::Notes` document.
//!
//! # Recognized lines
//!
//! - Lecture identifier: `F25-L5`, `SP26-L12`
//! - Figure tag: `FIG 3: caption`
//! - Block tags: `S:`, `SS:`, `PRE:`, `POST:`, `TH:`, `LM:`, `CO:`, `EX:`,
//!   `NOTE:`, `E:`, `R:`, `Q:`, `A:`
//!
//! Anything else is continuation content for the currently open block, or
//! discarded when no block is open yet. Tags are case-sensitive and must
//! start the line; a colon later in a line never opens a block.
//!
//! # Example
//!
//! ```
//! use notedok_core::segment;
//!
//! let notes = segment("F25-L5\nS: Kinematics\nQ: What is velocity?\nA: Rate of change of position.");
//! assert_eq!(notes.lecture.as_deref(), Some("F25-L5"));
//! assert_eq!(notes.blocks.len(), 3);
//! ```

use std::sync::OnceLock;

use regex::Regex;

use notedok_ast::{Block, Environment, EnvironmentKind, Figure, Notes};

/// The label a tag line opened, held until the block is flushed
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    Section,
    Subsection,
    PreSection,
    PostSection,
    Environment(EnvironmentKind),
    Figure(String),
    Question,
    Answer,
}

/// A block that has been opened but not yet flushed
#[derive(Debug)]
struct OpenBlock {
    label: Pending,
    lines: Vec<String>,
}

impl OpenBlock {
    fn new(label: Pending, rest: &str) -> Self {
        let lines = if rest.is_empty() {
            Vec::new()
        } else {
            vec![rest.to_string()]
        };
        Self { label, lines }
    }
}

/// Segmenter using a line-by-line state machine
struct Segmenter {
    /// Lecture identifier; a later match overwrites an earlier one
    lecture: Option<String>,
    /// Flushed blocks in input order
    blocks: Vec<Block>,
    /// Currently open block, if any
    open: Option<OpenBlock>,
}

impl Segmenter {
    fn new() -> Self {
        Self {
            lecture: None,
            blocks: Vec::new(),
            open: None,
        }
    }

    /// Segment the entire input
    fn segment(mut self, text: &str) -> Notes {
        for line in text.lines() {
            self.process_line(line.trim_end());
        }

        // Flush any still-open block
        self.flush();

        Notes {
            lecture: self.lecture,
            blocks: self.blocks,
        }
    }

    /// Process a single line, trailing whitespace already stripped
    fn process_line(&mut self, line: &str) {
        // Lecture identifier: recorded, never block content, never flushes
        if is_lecture_id(line) {
            self.lecture = Some(line.to_string());
            return;
        }

        // Figure tag
        if let Some((number, rest)) = match_figure_tag(line) {
            self.flush();
            self.open = Some(OpenBlock::new(Pending::Figure(number), rest));
            return;
        }

        // Other block tags
        if let Some((label, rest)) = match_block_tag(line) {
            self.flush();
            self.open = Some(OpenBlock::new(label, rest));
            return;
        }

        // Continuation content; discarded when no block is open
        if let Some(ref mut open) = self.open {
            open.lines.push(line.to_string());
        }
    }

    /// Flush the open block, if any, into the output sequence
    fn flush(&mut self) {
        let open = match self.open.take() {
            Some(open) => open,
            None => return,
        };

        let content = open.lines.join("\n").trim().to_string();
        let block = match open.label {
            Pending::Section => Block::Section(content),
            Pending::Subsection => Block::Subsection(content),
            Pending::PreSection => Block::PreSection(content),
            Pending::PostSection => Block::PostSection(content),
            Pending::Environment(kind) => Block::Environment(Environment::new(kind, content)),
            Pending::Figure(number) => Block::Figure(Figure::new(number, content)),
            Pending::Question => Block::Question(content),
            Pending::Answer => Block::Answer(content),
        };
        self.blocks.push(block);
    }
}

/// Check whether a line is exactly a lecture identifier
fn is_lecture_id(line: &str) -> bool {
    static LECTURE_ID_RE: OnceLock<Regex> = OnceLock::new();
    let re = LECTURE_ID_RE.get_or_init(|| Regex::new(r"^(SP|F)\d{2}-L\d+$").unwrap());
    re.is_match(line)
}

/// Match a figure tag line, returning the figure number and inline remainder
fn match_figure_tag(line: &str) -> Option<(String, &str)> {
    static FIG_RE: OnceLock<Regex> = OnceLock::new();
    let re = FIG_RE.get_or_init(|| Regex::new(r"^FIG\s+(\d+):\s*(.*)$").unwrap());

    let cap = re.captures(line)?;
    let number = cap.get(1)?.as_str().to_string();
    let rest = cap.get(2).map(|m| m.as_str()).unwrap_or("");
    Some((number, rest))
}

/// Match a non-figure tag line, returning its label and inline remainder
fn match_block_tag(line: &str) -> Option<(Pending, &str)> {
    static LABEL_RE: OnceLock<Regex> = OnceLock::new();
    let re = LABEL_RE
        .get_or_init(|| Regex::new(r"^(PRE|POST|TH|LM|CO|EX|NOTE|S|SS|E|R|Q|A):\s*(.*)$").unwrap());

    let cap = re.captures(line)?;
    let label = match cap.get(1)?.as_str() {
        "S" => Pending::Section,
        "SS" => Pending::Subsection,
        "PRE" => Pending::PreSection,
        "POST" => Pending::PostSection,
        "TH" => Pending::Environment(EnvironmentKind::Theorem),
        "LM" => Pending::Environment(EnvironmentKind::Lemma),
        "CO" => Pending::Environment(EnvironmentKind::Corollary),
        "EX" => Pending::Environment(EnvironmentKind::Exercise),
        "NOTE" => Pending::Environment(EnvironmentKind::Note),
        "E" => Pending::Environment(EnvironmentKind::Equation),
        "R" => Pending::Environment(EnvironmentKind::Derivation),
        "Q" => Pending::Question,
        "A" => Pending::Answer,
        _ => return None,
    };
    let rest = cap.get(2).map(|m| m.as_str()).unwrap_or("");
    Some((label, rest))
}

/// Segment raw note text into a document
pub fn segment(text: &str) -> Notes {
    Segmenter::new().segment(text)
}
