use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Flashcard Service</title>
</head>
<body>
  <h1>Flashcard Service</h1>
  <p>The API is running.</p>
  <ul>
    <li><code>GET /api/health</code></li>
    <li><code>POST /api/process-text</code></li>
    <li><code>POST /api/process-image</code></li>
  </ul>
</body>
</html>
"#;

/// Static landing page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
