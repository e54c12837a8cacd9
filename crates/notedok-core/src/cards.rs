//! Flashcard Emitter
//!
//! Extracts (question, answer) pairs from the block sequence. A question
//! block arms a pending slot; the next answer block consumes it. A second
//! question before an answer overwrites the slot, and an answer with no
//! pending question is dropped.

use std::fmt::Write;

use notedok_ast::{Block, Card};

/// Extract flashcards from a block sequence
pub fn emit_cards(blocks: &[Block]) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut pending: Option<&str> = None;

    for block in blocks {
        match block {
            Block::Question(question) => pending = Some(question),
            Block::Answer(answer) => {
                if let Some(question) = pending.take() {
                    cards.push(Card::new(question, answer.as_str()));
                }
            }
            _ => {}
        }
    }

    cards
}

/// Render cards as tab-separated lines, `question<TAB>answer`, no header
pub fn cards_to_tsv(cards: &[Card]) -> String {
    let mut out = String::new();
    for card in cards {
        writeln!(out, "{}\t{}", card.question, card.answer).unwrap();
    }
    out
}
