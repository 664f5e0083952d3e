use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::{error, warn};

use crate::metrics;

/// JSON error response: `{"error": "<title>", "detail": "<message>"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, error: error.into(), detail }
    }

    fn from_status(status: StatusCode, detail: String) -> Self {
        Self::new(status, status.canonical_reason().unwrap_or("Error"), Some(detail))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.error, detail = ?self.detail, "request failed");
        } else {
            warn!(status = %self.status, error = %self.error, detail = ?self.detail, "request rejected");
        }
        let body = ErrorBody { error: &self.error, detail: self.detail.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => {
                metrics::VALIDATION_FAILURES_TOTAL.inc();
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::NotFound(msg) => {
                metrics::NOT_FOUND_TOTAL.inc();
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))
            }
        }
    }
}

// Malformed bodies are 422 whether the JSON is broken, has the wrong shape or
// arrives without a JSON content type. Oversized bodies (413) keep their status.
impl From<JsonRejection> for JsonApiError {
    fn from(rej: JsonRejection) -> Self {
        let status = match rej {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => rej.status(),
        };
        Self::from_status(status, rej.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rej: PathRejection) -> Self {
        let status = match rej {
            PathRejection::FailedToDeserializePathParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::from_status(status, rej.body_text())
    }
}
