use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct FlashcardConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// API credential. When absent the service still starts and serves the
    /// health endpoint; generation endpoints answer 500 until it is set.
    pub api_key: Option<String>,
    /// Fixed model name. When absent the model is discovered from the
    /// provider's catalog at first use.
    pub model: Option<String>,
}

impl FlashcardConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            tracing::warn!(
                "GEMINI_API_KEY is not set; flashcard generation will fail until it is configured"
            );
        }

        let model = env::var("FLASHCARD_MODEL").ok().filter(|m| !m.is_empty());

        Ok(FlashcardConfig {
            common,
            gemini: GeminiSettings { api_key, model },
        })
    }
}
