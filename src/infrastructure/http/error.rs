//! HTTP Error Handling
//!
//! 错误以真实 HTTP 状态码 + `{ "message": ... }` 返回，
//! 与客户端期望的后端格式一致

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorBody;
use crate::application::{ApiError, ApplicationError};

/// HTTP 层错误
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
    ServiceUnavailable(String),
    /// 透传下游返回的状态码
    Upstream { status: StatusCode, message: String },
}

impl HttpError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Upstream { status, message } => (*status, message),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Server { status, message } => match StatusCode::from_u16(status) {
                Ok(status) => HttpError::Upstream { status, message },
                Err(_) => HttpError::Internal(message),
            },
            ApiError::Timeout | ApiError::Network(_) => HttpError::ServiceUnavailable(e.to_string()),
            ApiError::InvalidResponse(msg) => HttpError::Internal(msg),
        }
    }
}

impl From<ApplicationError> for HttpError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => HttpError::BadRequest(msg),
            ApplicationError::Api(api) => api.into(),
        }
    }
}

impl From<PathRejection> for HttpError {
    fn from(e: PathRejection) -> Self {
        HttpError::BadRequest(e.body_text())
    }
}

impl From<JsonRejection> for HttpError {
    fn from(e: JsonRejection) -> Self {
        HttpError::BadRequest(e.body_text())
    }
}
