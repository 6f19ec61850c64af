//! API error types with IntoResponse
//!
//! Every failure renders as `{"success": false, "error": <status>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::TriviaError;

/// API error type with explicit HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input (400)
    BadRequest { message: String },

    /// Resource or page not found (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Well-formed request that cannot be acted on (422)
    Unprocessable { message: String },

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest { message } | Self::Unprocessable { message } => message,
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::MethodNotAllowed => "method not allowed".to_owned(),
            Self::Internal { message } => {
                // Log the actual error, return generic message
                tracing::error!("Internal error: {}", message);
                "internal server error".to_owned()
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

impl From<TriviaError> for ApiError {
    fn from(e: TriviaError) -> Self {
        match e {
            err @ (TriviaError::Validation(_) | TriviaError::InvalidArgument { .. }) => {
                Self::bad_request(err.to_string())
            }
            TriviaError::NotFound { resource, id } => Self::NotFound { resource, id },
            TriviaError::Unprocessable { reason } => Self::Unprocessable { message: reason },
            TriviaError::Internal { reason } => Self::Internal { message: reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use trivia_core::models::ValidationError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err: ApiError = TriviaError::from(ValidationError::Empty { field: "answer" }).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 400);
        assert_eq!(body["message"], "answer cannot be empty");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err: ApiError = TriviaError::not_found("question", 3).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], 404);
    }

    #[tokio::test]
    async fn unprocessable_is_422() {
        let err: ApiError = TriviaError::unprocessable("searchTerm is required").into();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn internal_hides_cause() {
        let err: ApiError = TriviaError::internal("connection refused").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "internal server error");
    }
}
