//! Model resolution strategies.
//!
//! The provider's model catalog is account- and time-dependent, so a
//! hardcoded name can break when models are retired or renamed. The
//! generation stage therefore asks a `ModelResolver` for a model name; the
//! strategy can be a fixed name or live discovery with a cached result.

use super::providers::{ModelInfo, ProviderError, TextProvider};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[async_trait]
pub trait ModelResolver: Send + Sync {
    /// Resolve the preferred model name for generation.
    async fn resolve(&self, provider: &dyn TextProvider) -> Result<String, ProviderError>;
}

/// Always returns the configured model name.
pub struct StaticModelResolver {
    model: String,
}

impl StaticModelResolver {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[async_trait]
impl ModelResolver for StaticModelResolver {
    async fn resolve(&self, _provider: &dyn TextProvider) -> Result<String, ProviderError> {
        Ok(self.model.clone())
    }
}

/// Discovers a usable model from the provider's catalog and caches it for the
/// process lifetime. Preference order: a fast-tier model (name containing
/// "flash"), then a general-purpose one (name containing "pro").
pub struct DiscoveryModelResolver {
    cached: RwLock<Option<String>>,
}

impl DiscoveryModelResolver {
    pub fn new() -> Self {
        Self {
            cached: RwLock::new(None),
        }
    }

    fn pick(models: &[ModelInfo]) -> Option<String> {
        let usable: Vec<&ModelInfo> = models.iter().filter(|m| m.supports_generation()).collect();

        usable
            .iter()
            .find(|m| m.name.contains("flash"))
            .or_else(|| usable.iter().find(|m| m.name.contains("pro")))
            .map(|m| m.name.clone())
    }
}

impl Default for DiscoveryModelResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelResolver for DiscoveryModelResolver {
    async fn resolve(&self, provider: &dyn TextProvider) -> Result<String, ProviderError> {
        if let Some(model) = self.cached.read().await.clone() {
            return Ok(model);
        }

        let models = provider.list_models().await?;
        let model = Self::pick(&models).ok_or_else(|| {
            ProviderError::NoCompatibleModel(
                "check your API key and permissions".to_string(),
            )
        })?;

        tracing::info!(model = %model, "Discovered compatible model");

        *self.cached.write().await = Some(model.clone());
        Ok(model)
    }
}
