use crate::dtos::{FlashcardListResponse, ProcessTextRequest};
use crate::models::Flashcard;
use crate::services::generator::FlashcardGenerator;
use crate::services::providers::ImageAttachment;
use crate::services::GenerationInput;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use std::io::Cursor;

pub async fn process_text(
    State(state): State<AppState>,
    Json(req): Json<ProcessTextRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("No text provided")));
    }

    let generator = require_generator(&state)?;
    let flashcards = run_generation(generator, GenerationInput::Text(req.text)).await?;

    Ok(Json(FlashcardListResponse {
        success: true,
        count: flashcards.len(),
        flashcards,
        source: "gemini_text",
    }))
}

pub async fn process_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| {
                AppError::BadRequest(anyhow::anyhow!("Failed to read image bytes: {}", e))
            })?
            .to_vec();

        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No image file found")))?;

    if file_name.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "No image file selected"
        )));
    }

    // Reject undecodable uploads before spending an API call. Re-encoding to
    // PNG also normalizes the mime type regardless of what the client sent.
    let decoded = image::load_from_memory(&data).map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Could not read the uploaded image: {}", e))
    })?;

    let mut png_bytes = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to re-encode image: {}", e))
        })?;

    let attachment = ImageAttachment {
        mime_type: "image/png".to_string(),
        data: png_bytes,
    };

    let generator = require_generator(&state)?;
    let flashcards = run_generation(generator, GenerationInput::Image(attachment)).await?;

    Ok(Json(FlashcardListResponse {
        success: true,
        count: flashcards.len(),
        flashcards,
        source: "gemini_vision",
    }))
}

fn require_generator(state: &AppState) -> Result<&FlashcardGenerator, AppError> {
    state.generator.as_deref().ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!(
            "Gemini API key is not configured. Please set the GEMINI_API_KEY environment variable."
        ))
    })
}

async fn run_generation(
    generator: &FlashcardGenerator,
    input: GenerationInput,
) -> Result<Vec<Flashcard>, AppError> {
    generator.generate(input).await.map_err(|e| {
        tracing::error!(error = %e, "Flashcard generation failed");
        AppError::InternalError(anyhow::anyhow!(
            "Failed to generate flashcards with Gemini: {}",
            e
        ))
    })
}
