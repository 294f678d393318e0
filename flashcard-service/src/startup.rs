//! Application startup and lifecycle management.

use crate::config::FlashcardConfig;
use crate::handlers;
use crate::services::generator::FlashcardGenerator;
use crate::services::providers::gemini::GeminiClient;
use crate::services::providers::TextProvider;
use crate::services::resolver::{DiscoveryModelResolver, ModelResolver, StaticModelResolver};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Uploads beyond this are rejected by the framework before the handler runs.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Shared application state. Requests are otherwise independent; the only
/// cross-request state is the resolver's cached model name.
#[derive(Clone)]
pub struct AppState {
    pub config: FlashcardConfig,
    pub generator: Option<Arc<FlashcardGenerator>>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration, wiring the Gemini
    /// provider when a credential is present.
    pub async fn build(config: FlashcardConfig) -> Result<Self, AppError> {
        let generator = match &config.gemini.api_key {
            Some(api_key) => {
                let provider: Arc<dyn TextProvider> =
                    Arc::new(GeminiClient::new(api_key.clone()));

                let resolver: Arc<dyn ModelResolver> = match &config.gemini.model {
                    Some(model) => {
                        tracing::info!(model = %model, "Using fixed Gemini model");
                        Arc::new(StaticModelResolver::new(model.clone()))
                    }
                    None => {
                        tracing::info!("No model configured; will discover one from the catalog");
                        Arc::new(DiscoveryModelResolver::new())
                    }
                };

                Some(Arc::new(FlashcardGenerator::new(provider, resolver)))
            }
            None => None,
        };

        Self::build_with_generator(config, generator).await
    }

    /// Build with an explicit generator (or none). Tests use this to inject a
    /// mock provider.
    pub async fn build_with_generator(
        config: FlashcardConfig,
        generator: Option<Arc<FlashcardGenerator>>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            generator,
        };

        // Port 0 binds a random port for testing.
        let addr = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Flashcard service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/", get(handlers::index))
            .route("/api/health", get(handlers::health_check))
            .route("/api/process-text", post(handlers::process_text))
            .route("/api/process-image", post(handlers::process_image))
            .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        axum::serve(self.listener, router).await
    }
}
