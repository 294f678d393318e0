use serde::{Deserialize, Serialize};

/// A single question/answer pair, fully validated. Ids are unique within one
/// response only; nothing is persisted across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: u8,
}
