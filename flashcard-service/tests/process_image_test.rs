mod common;

use axum::http::StatusCode;
use common::TestApp;
use reqwest::multipart;
use std::io::Cursor;

/// A tiny valid PNG for upload tests.
fn png_fixture() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 40, 40]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode fixture PNG");
    bytes
}

#[tokio::test]
async fn rejects_missing_image_field() {
    let app = TestApp::spawn_with_reply("[]").await;
    let client = reqwest::Client::new();

    // A multipart form whose only field is not named "image".
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(png_fixture())
            .file_name("notes.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/api/process-image", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), StatusCode::BAD_REQUEST.as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "No image file found");
}

#[tokio::test]
async fn rejects_empty_filename() {
    let app = TestApp::spawn_with_reply("[]").await;
    let client = reqwest::Client::new();

    let form = multipart::Form::new().part(
        "image",
        multipart::Part::bytes(png_fixture())
            .file_name("")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/api/process-image", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), StatusCode::BAD_REQUEST.as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "No image file selected");
}

#[tokio::test]
async fn rejects_undecodable_image() {
    let app = TestApp::spawn_with_reply("[]").await;
    let client = reqwest::Client::new();

    let form = multipart::Form::new().part(
        "image",
        multipart::Part::bytes(b"definitely not an image".to_vec())
            .file_name("notes.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/api/process-image", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), StatusCode::BAD_REQUEST.as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Could not read the uploaded image"));
}

#[tokio::test]
async fn generates_flashcards_from_image() {
    let app = TestApp::spawn_with_reply(r#"[{"question":"Q1","answer":"A1"}]"#).await;
    let client = reqwest::Client::new();

    let form = multipart::Form::new().part(
        "image",
        multipart::Part::bytes(png_fixture())
            .file_name("notes.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/api/process-image", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), StatusCode::OK.as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
    assert_eq!(body["source"], "gemini_vision");

    let cards = body["flashcards"].as_array().expect("flashcards missing");
    assert_eq!(cards[0]["question"], "Q1");
    assert_eq!(cards[0]["answer"], "A1");
}

#[tokio::test]
async fn generation_failure_from_image_is_500() {
    let app = TestApp::spawn_with_reply("no json here").await;
    let client = reqwest::Client::new();

    let form = multipart::Form::new().part(
        "image",
        multipart::Part::bytes(png_fixture())
            .file_name("notes.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/api/process-image", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response.status().as_u16(),
        StatusCode::INTERNAL_SERVER_ERROR.as_u16()
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Failed to generate flashcards"));
}
