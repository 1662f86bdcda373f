//! 系统处理器

use axum::{extract::State, response::Json};
use tracing::error;

use crate::app::AppState;
use crate::core::{error::CoreError, response::MessageResponse};

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome! This is the contacts API"))
}

/// 502 whenever the store cannot answer `SELECT 1`.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, CoreError> {
    state.contacts.ping().await.map_err(|e| {
        error!("Health check failed: {}", e);
        CoreError::DatabaseUnavailable("Error connecting to the database".to_string())
    })?;

    Ok(Json(MessageResponse::new("Database is healthy")))
}
