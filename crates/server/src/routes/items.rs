use axum::{extract::State, http::StatusCode, Json};
use service::items::{Item, ItemInput, ItemPatch};

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ItemIdPath};
use crate::metrics;
use crate::routes::AppState;

/// List every stored item in insertion order.
#[utoipa::path(
    get, path = "/items", tag = "items",
    responses((status = 200, description = "All items", body = [crate::openapi::ItemDoc]))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.list().await)
}

/// Create an item; the store assigns its id.
#[utoipa::path(
    post, path = "/items", tag = "items",
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Malformed body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ItemInput>,
) -> Result<(StatusCode, Json<Item>), JsonApiError> {
    let item = state.items.create(input).await?;
    metrics::ITEMS_CREATED_TOTAL.inc();
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get, path = "/items/{id}", tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ItemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
) -> Result<Json<Item>, JsonApiError> {
    Ok(Json(state.items.get(id).await?))
}

/// Partial update: only the fields present in the body change.
#[utoipa::path(
    put, path = "/items/{id}", tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    request_body = crate::openapi::ItemPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ItemDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Malformed body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
    ApiJson(patch): ApiJson<ItemPatch>,
) -> Result<Json<Item>, JsonApiError> {
    let item = state.items.update(id, patch).await?;
    metrics::ITEMS_UPDATED_TOTAL.inc();
    Ok(Json(item))
}

#[utoipa::path(
    delete, path = "/items/{id}", tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
) -> Result<StatusCode, JsonApiError> {
    state.items.delete(id).await?;
    metrics::ITEMS_DELETED_TOTAL.inc();
    Ok(StatusCode::NO_CONTENT)
}
