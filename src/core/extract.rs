//! 请求提取器，拒绝时返回 `CoreError` 错误体

use axum::extract::{FromRequest, FromRequestParts};

use super::error::CoreError;

/// 解析失败时返回标准错误体的 `axum::Json`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(CoreError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(CoreError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(CoreError))]
pub struct AppQuery<T>(pub T);
