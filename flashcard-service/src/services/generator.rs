//! The generation stage: prompt construction, reply parsing, and
//! normalization into the canonical flashcard shape.

use crate::models::Flashcard;
use crate::services::providers::{ImageAttachment, ProviderError, TextProvider};
use crate::services::resolver::ModelResolver;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

const TEXT_PROMPT_TEMPLATE: &str = r#"You are an expert assistant for creating educational materials.
From the following text, generate a list of flashcards in a valid JSON format.
Each flashcard in the list should be an object with exactly two keys: "question" and "answer".
Make the questions and answers clear and concise.

Text: "{text}""#;

const IMAGE_PROMPT: &str = r#"You are an expert assistant for creating educational materials.
From the content of the attached image, generate a list of flashcards in a valid JSON format.
Each flashcard in the list should be an object with exactly two keys: "question" and "answer".
Make the questions and answers clear and concise."#;

const FLASHCARD_CATEGORY: &str = "Gemini";
const FLASHCARD_DIFFICULTY: u8 = 3;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("model reply was not a valid flashcard list: {0}")]
    MalformedReply(String),
}

/// Input to the generation stage: plain text, or an image for a
/// vision-capable model.
pub enum GenerationInput {
    Text(String),
    Image(ImageAttachment),
}

/// Turns text or images into flashcards through a provider and a model
/// resolution strategy. Stateless apart from whatever the resolver caches.
pub struct FlashcardGenerator {
    provider: Arc<dyn TextProvider>,
    resolver: Arc<dyn ModelResolver>,
}

impl FlashcardGenerator {
    pub fn new(provider: Arc<dyn TextProvider>, resolver: Arc<dyn ModelResolver>) -> Self {
        Self { provider, resolver }
    }

    pub async fn generate(&self, input: GenerationInput) -> Result<Vec<Flashcard>, GenerationError> {
        let model = self.resolver.resolve(self.provider.as_ref()).await?;

        let (prompt, image) = match &input {
            GenerationInput::Text(text) => (TEXT_PROMPT_TEMPLATE.replace("{text}", text), None),
            GenerationInput::Image(image) => (IMAGE_PROMPT.to_string(), Some(image)),
        };

        let reply = self.provider.generate(&model, &prompt, image).await?;

        let pairs = parse_reply(&reply)?;

        tracing::info!(model = %model, count = pairs.len(), "Generated flashcards");

        Ok(pairs.into_iter().map(normalize).collect())
    }
}

/// The shape the model is asked to produce. Anything else is rejected here,
/// at the parse boundary, rather than propagated half-formed.
#[derive(Debug, Deserialize)]
struct RawFlashcard {
    question: String,
    answer: String,
}

fn parse_reply(reply: &str) -> Result<Vec<RawFlashcard>, GenerationError> {
    let cleaned = strip_code_fences(reply);

    let pairs: Vec<RawFlashcard> = serde_json::from_str(&cleaned)
        .map_err(|e| GenerationError::MalformedReply(e.to_string()))?;

    for (i, pair) in pairs.iter().enumerate() {
        if pair.question.trim().is_empty() {
            return Err(GenerationError::MalformedReply(format!(
                "entry {} has an empty question",
                i
            )));
        }
        if pair.answer.trim().is_empty() {
            return Err(GenerationError::MalformedReply(format!(
                "entry {} has an empty answer",
                i
            )));
        }
    }

    Ok(pairs)
}

/// Models routinely wrap JSON replies in markdown code fences.
fn strip_code_fences(reply: &str) -> String {
    reply
        .trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn normalize(raw: RawFlashcard) -> Flashcard {
    Flashcard {
        id: format!("card_{}", Uuid::new_v4().simple()),
        question: raw.question,
        answer: raw.answer,
        category: FLASHCARD_CATEGORY.to_string(),
        difficulty: FLASHCARD_DIFFICULTY,
    }
}
