use crate::models::Flashcard;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/process-text`. The field is defaulted so that an empty
/// JSON object reaches the handler and gets the descriptive 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(default)]
    pub text: String,
}

/// Success envelope shared by both generation endpoints.
#[derive(Debug, Serialize)]
pub struct FlashcardListResponse {
    pub success: bool,
    pub flashcards: Vec<Flashcard>,
    pub count: usize,
    pub source: &'static str,
}
