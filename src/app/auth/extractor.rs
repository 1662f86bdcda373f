//! `Authorization: Bearer` 提取器

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};

use super::model::User;
use crate::app::AppState;
use crate::core::error::CoreError;

/// The user behind the request's bearer token. Rejects with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = CoreError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| {
                debug!("missing or malformed bearer token");
                CoreError::Unauthorized
            })?;

        match state.auth.resolve(token).await {
            Ok(user) => Ok(CurrentUser(user)),
            Err(CoreError::Unauthorized) => {
                warn!("rejected unknown bearer token");
                Err(CoreError::Unauthorized)
            }
            Err(other) => Err(other),
        }
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
