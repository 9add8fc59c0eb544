use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use sqlx::PgPool;

use crate::database::DatabaseManager;

/// Pool to ping; `None` when the app runs without a database (tests)
#[derive(Clone, Default)]
pub struct HealthState {
    pub pool: Option<PgPool>,
}

/// GET /health
pub async fn get(State(state): State<HealthState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let Some(pool) = state.pool else {
        return (
            StatusCode::OK,
            Json(json!({ "status": "ok", "timestamp": now, "database": "not configured" })),
        );
    };

    match DatabaseManager::health_check(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "timestamp": now, "database": "ok" })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database": "unavailable",
                "error": e.to_string()
            })),
        ),
    }
}
