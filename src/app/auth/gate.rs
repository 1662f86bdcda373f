//! 凭证解析

use super::model::User;
use crate::core::error::CoreError;
use async_trait::async_trait;
use sqlx::postgres::PgPool;
use std::collections::HashMap;

/// Resolves a bearer credential to the calling user.
#[async_trait]
pub trait AuthGate: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<User, CoreError>;
}

/// Looks tokens up in `users.access_token`.
#[derive(Clone)]
pub struct PgAuthGate {
    pool: PgPool,
}

impl PgAuthGate {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthGate for PgAuthGate {
    async fn resolve(&self, token: &str) -> Result<User, CoreError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email FROM users WHERE access_token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CoreError::Unauthorized)
    }
}

/// Fixed token table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthGate {
    tokens: HashMap<String, User>,
}

impl InMemoryAuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: User) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }
}

#[async_trait]
impl AuthGate for InMemoryAuthGate {
    async fn resolve(&self, token: &str) -> Result<User, CoreError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(CoreError::Unauthorized)
    }
}
