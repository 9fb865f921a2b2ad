//! Embedded chat page

use axum::{http::header, response::{Html, IntoResponse}};

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const SCRIPT_JS: &str = include_str!("../../assets/script.js");

/// GET / - Chat page
pub async fn page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/script.js - Chat page script
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
