//! 欢迎页和健康检查

pub mod handler;

use axum::{routing::get, Router};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::root))
        .route("/database/healthchecker", get(handler::health_check))
}
