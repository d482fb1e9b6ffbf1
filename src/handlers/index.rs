//! Front-end page handler

use axum::response::Html;

/// Serve the bundled single-page front end.
pub async fn page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
