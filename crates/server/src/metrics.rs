use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static ITEMS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("item_api_items_created_total", "Total items created")
        .expect("register items_created_total")
});

pub static ITEMS_UPDATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("item_api_items_updated_total", "Total items updated")
        .expect("register items_updated_total")
});

pub static ITEMS_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("item_api_items_deleted_total", "Total items deleted")
        .expect("register items_deleted_total")
});

pub static VALIDATION_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "item_api_validation_failures_total",
        "Total requests rejected by item validation"
    )
    .expect("register validation_failures_total")
});

pub static NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "item_api_not_found_total",
        "Total requests for unknown item ids"
    )
    .expect("register not_found_total")
});

/// Force registration so every counter shows up in the first scrape.
pub fn init() {
    Lazy::force(&ITEMS_CREATED_TOTAL);
    Lazy::force(&ITEMS_UPDATED_TOTAL);
    Lazy::force(&ITEMS_DELETED_TOTAL);
    Lazy::force(&VALIDATION_FAILURES_TOTAL);
    Lazy::force(&NOT_FOUND_TOTAL);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    match String::from_utf8(buffer) {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        ),
    }
}
