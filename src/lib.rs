//! # 联系人 API
//!
//! 按用户隔离的联系人 REST 后端，包括：
//! - 仅限当前用户的增删改查和子串搜索
//! - 跨年也正确的近期生日查询
//! - 基于 sqlx 的 Postgres 存储，以及测试用的内存实现

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, AppState};
pub use crate::core::error::CoreError;
