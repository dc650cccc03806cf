use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// API-boundary error: a client-safe message plus optional internal detail.
/// The detail is logged server-side and never serialized to the client.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    message: String,
    detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, message: message.into(), detail }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if let Some(detail) = &self.detail {
            error!(status = %self.status, detail = %detail, "{}", self.message);
        }
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_status_and_hides_detail() {
        let err = JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to create order",
            Some("connection refused at 10.0.0.5:5432".into()),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
