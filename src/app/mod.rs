//! HTTP 应用：共享状态、路由和中间件

pub mod auth;
pub mod contacts;
pub mod system;

use axum::{middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use self::auth::gate::AuthGate;
use self::contacts::service::ContactService;
use crate::core::middleware::request_logging_middleware;

#[derive(Clone)]
pub struct AppState {
    pub contacts: ContactService,
    pub auth: Arc<dyn AuthGate>,
}

impl AppState {
    pub fn new(contacts: ContactService, auth: Arc<dyn AuthGate>) -> Self {
        Self { contacts, auth }
    }
}

/// Every route plus tracing, CORS, request timeout and request logging.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(system::routes())
        .merge(contacts::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(request_timeout))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
