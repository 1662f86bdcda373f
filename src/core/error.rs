//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// 服务层错误，统一转换为 HTTP 响应
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    /// Well-formed JSON that does not fit the request type.
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("could not validate credentials")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    /// Carries a client-safe message; the driver error is logged on conversion.
    #[error("{0}")]
    DatabaseUnavailable(String),
    #[error("internal error: {0}")]
    InternalServerError(String),
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    pub fn contact_not_found(id: i32) -> Self {
        CoreError::NotFound(format!("Contact with id: {} was not found", id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::DatabaseUnavailable(_) => StatusCode::BAD_GATEWAY,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, user_message) = match self {
            CoreError::BadRequest(msg) => ("BAD_REQUEST", msg),
            CoreError::UnprocessableEntity(msg) => ("UNPROCESSABLE_ENTITY", msg),
            CoreError::Unauthorized => (
                "UNAUTHORIZED",
                "Could not validate credentials".to_string(),
            ),
            CoreError::NotFound(msg) => ("NOT_FOUND", msg),
            CoreError::DatabaseUnavailable(msg) => ("DATABASE_UNAVAILABLE", msg),
            CoreError::InternalServerError(msg) => {
                error!("Internal error: {}", msg);
                (
                    "INTERNAL_SERVER_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => {
                error!("Database unavailable: {}", err);
                CoreError::DatabaseUnavailable("Database unavailable".to_string())
            }
            other => CoreError::InternalServerError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => {
                CoreError::UnprocessableEntity(rejection.body_text())
            }
            other => CoreError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();
        messages.sort();

        CoreError::BadRequest(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoreError::contact_not_found(3).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(CoreError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            CoreError::DatabaseUnavailable("down".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_unprocessable_entity_body() {
        let err = CoreError::UnprocessableEntity("missing field `last_name`".into());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_message() {
        let err = CoreError::contact_not_found(42);
        assert_eq!(err.to_string(), "Contact with id: 42 was not found");
    }

    #[test]
    fn test_sqlx_error_classification() {
        assert!(matches!(
            CoreError::from(sqlx::Error::PoolTimedOut),
            CoreError::DatabaseUnavailable(_)
        ));
        assert!(matches!(
            CoreError::from(sqlx::Error::RowNotFound),
            CoreError::InternalServerError(_)
        ));
    }
}
