//! Mock provider implementation for testing.

use super::{ImageAttachment, ModelInfo, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock text provider returning a canned reply. Records the last prompt so
/// tests can assert the input was embedded.
pub struct MockTextProvider {
    reply: String,
    models: Vec<ModelInfo>,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            models: vec![ModelInfo {
                name: "models/gemini-2.0-flash".to_string(),
                supported_generation_methods: vec!["generateContent".to_string()],
            }],
            last_prompt: Mutex::new(None),
        }
    }

    pub fn with_models(mut self, models: Vec<ModelInfo>) -> Self {
        self.models = models;
        self
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _model: &str,
        prompt: &str,
        _image: Option<&ImageAttachment>,
    ) -> Result<String, ProviderError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        Ok(self.reply.clone())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        Ok(self.models.clone())
    }
}
