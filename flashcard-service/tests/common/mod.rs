use flashcard_service::config::{FlashcardConfig, GeminiSettings};
use flashcard_service::services::generator::FlashcardGenerator;
use flashcard_service::services::providers::mock::MockTextProvider;
use flashcard_service::services::resolver::StaticModelResolver;
use flashcard_service::startup::Application;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub mock: Option<Arc<MockTextProvider>>,
}

impl TestApp {
    /// Spawn the app on a random port with a mock provider returning `reply`.
    pub async fn spawn_with_reply(reply: &str) -> Self {
        let mock = Arc::new(MockTextProvider::new(reply));
        let generator = FlashcardGenerator::new(
            mock.clone(),
            Arc::new(StaticModelResolver::new("gemini-test")),
        );

        let mut app = Self::spawn_with_generator(Some(Arc::new(generator))).await;
        app.mock = Some(mock);
        app
    }

    /// Spawn the app with no generator wired, as when GEMINI_API_KEY is
    /// absent.
    pub async fn spawn_unconfigured() -> Self {
        Self::spawn_with_generator(None).await
    }

    pub async fn spawn_with_generator(generator: Option<Arc<FlashcardGenerator>>) -> Self {
        let config = FlashcardConfig {
            common: service_core::config::Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            gemini: GeminiSettings {
                api_key: None,
                model: None,
            },
        };

        let app = Application::build_with_generator(config, generator)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to come up by polling the health endpoint.
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            mock: None,
        }
    }
}
