use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ItemDoc {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_offer: Option<bool>,
}

#[derive(ToSchema)]
pub struct ItemInputDoc {
    /// Must not be empty (whitespace is kept as given)
    pub name: String,
    pub description: Option<String>,
    /// Must be >= 0
    pub price: f64,
    pub is_offer: Option<bool>,
}

/// Omitted fields are left unchanged. `null` clears `description` and
/// `is_offer` and is ignored for `name` and `price`.
#[derive(ToSchema)]
pub struct ItemPatchDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub is_offer: Option<bool>,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Item Management API", version = "1.0.0"),
    paths(
        crate::routes::health,
        crate::routes::items::list_items,
        crate::routes::items::create_item,
        crate::routes::items::get_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            ItemDoc,
            ItemInputDoc,
            ItemPatchDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;
