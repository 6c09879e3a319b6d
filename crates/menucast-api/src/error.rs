use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("menu not found")]
    MenuNotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON:API style error object, one per failure.
#[derive(Debug, Serialize)]
pub struct ErrorObject {
    pub status: String,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorObject>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MenuNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::MenuNotFound => "Menu not found.".to_string(),
            ApiError::Internal(_) => "Internal server error.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            errors: vec![ErrorObject {
                status: status.as_u16().to_string(),
                title: status
                    .canonical_reason()
                    .unwrap_or("Error")
                    .to_string(),
                detail: self.detail(),
            }],
        };
        // Errors are never cacheable.
        let mut resp = (status, Json(body)).into_response();
        resp.headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        resp
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<menucast_core::MenuError> for ApiError {
    fn from(err: menucast_core::MenuError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
