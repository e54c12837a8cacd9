//! Flashcard pair destined for spaced-repetition export

use serde::{Deserialize, Serialize};

/// One question/answer pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Front of the card
    pub question: String,
    /// Back of the card
    pub answer: String,
}

impl Card {
    /// Create a card
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
