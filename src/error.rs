// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-facing messages.
///
/// Every variant serializes to the `{ok:false, message}` envelope the
/// console frontend expects. Login failures deliberately reuse 401 across
/// distinct causes; the distinguishing detail lives only in the body.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 502 Bad Gateway (upstream directory issues)
    BadGateway(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::BadGateway(msg) => msg,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "ok": false,
            "message": self.message(),
        })
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }
}

impl From<crate::services::admins::DirectoryError> for ApiError {
    fn from(err: crate::services::admins::DirectoryError) -> Self {
        use crate::services::admins::DirectoryError;
        match err {
            DirectoryError::NotConfigured => {
                ApiError::internal_server_error("API base is not configured on the server.")
            }
            DirectoryError::Lookup(msg) => ApiError::bad_request(msg),
            DirectoryError::Http(e) => {
                // Log the real error but return a generic message
                tracing::error!("admins directory request failed: {}", e);
                ApiError::bad_gateway("Admin service is unavailable.")
            }
            DirectoryError::Malformed(msg) => {
                tracing::error!("admins directory returned malformed data: {}", msg);
                ApiError::bad_gateway("Empty response from admin service.")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
