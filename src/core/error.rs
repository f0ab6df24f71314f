//! 核心错误处理模块

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 核心错误类型，在路由边界统一转换为状态码和 JSON
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        CoreError::NotFound(format!("{entity} {id} not found"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            CoreError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_message, user_message) = match self {
            CoreError::BadRequest(msg) => ("BAD_REQUEST", msg),
            CoreError::NotFound(msg) => ("NOT_FOUND", msg),
            CoreError::MethodNotAllowed(msg) => ("METHOD_NOT_ALLOWED", msg),
            CoreError::PayloadTooLarge(msg) => ("PAYLOAD_TOO_LARGE", msg),
            CoreError::InternalServerError(msg) => ("INTERNAL_SERVER_ERROR", msg),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        error!("Database error: {}", err);
        CoreError::InternalServerError("Database error".to_string())
    }
}

/// 未匹配任何路由
pub async fn fallback() -> CoreError {
    CoreError::NotFound("The requested resource does not exist".to_string())
}

/// 路径存在但方法不支持
pub async fn method_not_allowed(method: Method, uri: Uri) -> CoreError {
    CoreError::MethodNotAllowed(format!("{method} is not supported on {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoreError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CoreError::not_found("Bakery", 1).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            CoreError::MethodNotAllowed("x".into()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            CoreError::PayloadTooLarge("x".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            CoreError::from(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        let CoreError::NotFound(msg) = CoreError::not_found("BakedGood", 7) else {
            panic!("expected NotFound");
        };
        assert_eq!(msg, "BakedGood 7 not found");
    }
}
