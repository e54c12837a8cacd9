//! TDD tests for the note segmenter
//!
//! These tests pin the segmentation contract: tag recognition, flush
//! semantics, and the interaction between lecture identifiers, figures,
//! and flashcard blocks in one document.

use notedok_ast::{Block, Environment, EnvironmentKind, Figure, Notes};
use notedok_core::{emit_cards, segment};

/// Test the basic segmentation flow
///
/// Input:
/// ```text
/// F25-L5
/// S: Kinematics
/// TH: A body at rest
/// stays at rest.
/// Q: What is velocity?
/// A: Rate of change of position.
/// ```
#[test]
fn test_segment_basic_flow() {
    let input = "F25-L5\nS: Kinematics\nTH: A body at rest\nstays at rest.\nQ: What is velocity?\nA: Rate of change of position.";

    let expected = Notes {
        lecture: Some("F25-L5".to_string()),
        blocks: vec![
            Block::Section("Kinematics".to_string()),
            Block::Environment(Environment::new(
                EnvironmentKind::Theorem,
                "A body at rest\nstays at rest.",
            )),
            Block::Question("What is velocity?".to_string()),
            Block::Answer("Rate of change of position.".to_string()),
        ],
    };

    assert_eq!(segment(input), expected);
}

/// Blocks appear in the order their tags appear in the input
#[test]
fn test_segment_order_preserved() {
    let input = "SS: later heading\nE: x = y\nS: earlier heading comes second";
    let notes = segment(input);

    assert_eq!(notes.blocks.len(), 3);
    assert!(matches!(notes.blocks[0], Block::Subsection(_)));
    assert!(matches!(notes.blocks[1], Block::Environment(_)));
    assert!(matches!(notes.blocks[2], Block::Section(_)));
}

/// Lines before the first tag never reach any block
#[test]
fn test_unlabeled_prefix_never_emitted() {
    let input = "Physics 201, week 3\ntaken by hand\n\nS: Momentum\nbody text";
    let notes = segment(input);

    assert_eq!(notes.blocks.len(), 1);
    assert_eq!(notes.blocks[0], Block::Section("Momentum\nbody text".to_string()));
}

/// A figure tag carries its number; content is the caption
#[test]
fn test_figure_block() {
    let input = "FIG 2: Mass on a spring\nwith damping";
    let notes = segment(input);

    assert_eq!(
        notes.blocks,
        vec![Block::Figure(Figure::new("2", "Mass on a spring\nwith damping"))]
    );
}

/// An unknown word before a colon is plain content
#[test]
fn test_unknown_tag_stays_content() {
    let input = "NOTE: real tag\nFOO: bar";
    let notes = segment(input);

    assert_eq!(
        notes.blocks,
        vec![Block::Environment(Environment::new(
            EnvironmentKind::Note,
            "real tag\nFOO: bar",
        ))]
    );
}

/// Segmenter output feeds the card emitter: unanswered questions drop
#[test]
fn test_cards_from_segmented_input() {
    let input = "Q: 2+2?\nQ: 3+3?\nA: 6\nS: Closing\nA: orphan answer";
    let notes = segment(input);
    let cards = emit_cards(&notes.blocks);

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].question, "3+3?");
    assert_eq!(cards[0].answer, "6");
}

/// A document with tags but no lecture identifier segments normally
#[test]
fn test_no_lecture_id() {
    let input = "S: Untitled lecture";
    let notes = segment(input);

    assert!(notes.lecture.is_none());
    assert_eq!(notes.blocks.len(), 1);
}

/// CRLF input behaves like LF input: the `\r` is trailing whitespace
#[test]
fn test_crlf_line_endings() {
    let input = "F25-L5\r\nS: Kinematics\r\nbody\r\n";
    let notes = segment(input);

    assert_eq!(notes.lecture.as_deref(), Some("F25-L5"));
    assert_eq!(notes.blocks, vec![Block::Section("Kinematics\nbody".to_string())]);
}
