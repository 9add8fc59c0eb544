pub mod admin;
pub mod health;
pub mod phrases;

use axum::http::{StatusCode, Uri};

/// Fallback for unmatched routes. Answers 400, not 404.
pub async fn not_found(uri: Uri) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, format!("not found: '{}'", uri.path()))
}
