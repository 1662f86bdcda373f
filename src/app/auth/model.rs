//! 认证用户模型

use serde::{Deserialize, Serialize};

/// Owner of contacts. Credentials are managed outside this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}
