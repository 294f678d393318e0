//! Generative-language provider abstraction.
//!
//! The generation stage talks to a `TextProvider` trait object so the Gemini
//! specifics stay out of prompt handling and so tests can swap in a mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("No compatible model found: {0}")]
    NoCompatibleModel(String),
}

/// An image to send to the model as inline data, already normalized by the
/// upload handler.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One entry from the provider's model catalog.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub name: String,
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

/// Trait for content-generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send a prompt (and optionally an image) to the named model and return
    /// the raw reply text. One attempt, no retry.
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<String, ProviderError>;

    /// List the models the account can access, for dynamic model discovery.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;
}
