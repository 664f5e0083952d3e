//! Extractors whose rejections use the JSON error shape.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use service::errors::ServiceError;
use service::items::ItemId;

use crate::errors::JsonApiError;

/// `axum::Json` with malformed bodies reported as 422 [`JsonApiError`]s.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

/// The `{id}` segment of `/items/{id}`.
///
/// Any integer is a lookup: integers outside the id range (negative or too
/// large) can never name an item and are rejected as not found. Only segments
/// that are not integers at all are 422.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemIdPath(pub ItemId);

impl ItemIdPath {
    fn parse(raw: &str) -> Result<Self, JsonApiError> {
        if let Ok(id) = raw.parse::<ItemId>() {
            return Ok(Self(id));
        }
        let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ServiceError::item_not_found(raw).into());
        }
        Err(JsonApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Unprocessable Entity",
            Some(format!("Invalid URL: item id must be an integer, got {raw:?}")),
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Self::parse(&raw)
    }
}
