use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

fn build_app() -> anyhow::Result<Router> {
    server::build_app(&configs::AppConfig::default())
}

fn json_request(method: &str, uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

fn empty_request(method: &str, uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method(method).uri(uri).body(Body::empty())?)
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

#[tokio::test]
async fn create_get_delete_walkthrough() -> anyhow::Result<()> {
    let app = build_app()?;

    let (status, widget) = send(&app, json_request("POST", "/items", &json!({"name": "Widget", "price": 9.99}))?).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        widget,
        json!({"id": 1, "name": "Widget", "description": null, "price": 9.99, "is_offer": null})
    );

    let (status, body) = send(&app, json_request("POST", "/items", &json!({"name": "Bolt", "price": -1}))?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["detail"], "Price cannot be negative.");

    let (status, fetched) = send(&app, empty_request("GET", "/items/1")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, widget);

    let (status, body) = send(&app, empty_request("DELETE", "/items/1")?).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, empty_request("GET", "/items/1")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item with ID 1 not found");
    Ok(())
}

#[tokio::test]
async fn ids_increase_and_list_keeps_order() -> anyhow::Result<()> {
    let app = build_app()?;

    for (i, name) in ["a", "b", "c"].iter().enumerate() {
        let (status, body) = send(&app, json_request("POST", "/items/", &json!({"name": name, "price": 1.0, "is_offer": true}))?).await?;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], json!(i + 1));
        assert_eq!(body["is_offer"], json!(true));
    }

    let (_, _) = send(&app, empty_request("DELETE", "/items/3")?).await?;
    let (status, body) = send(&app, json_request("POST", "/items", &json!({"name": "d", "price": 2.0}))?).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 4, "deleted ids are not reused");

    let (status, list) = send(&app, empty_request("GET", "/items")?).await?;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = list.as_array().into_iter().flatten().map(|i| i["name"].clone()).collect();
    assert_eq!(names, vec![json!("a"), json!("b"), json!("d")]);

    let (_, slash_list) = send(&app, empty_request("GET", "/items/")?).await?;
    assert_eq!(slash_list, list);
    Ok(())
}

#[tokio::test]
async fn empty_list_is_an_empty_array() -> anyhow::Result<()> {
    let app = build_app()?;
    let (status, body) = send(&app, empty_request("GET", "/items")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn partial_update_changes_only_given_fields() -> anyhow::Result<()> {
    let app = build_app()?;
    send(&app, json_request("POST", "/items", &json!({"name": "Widget", "description": "small", "price": 5.0, "is_offer": true}))?).await?;

    let (status, body) = send(&app, json_request("PUT", "/items/1", &json!({"description": "large"}))?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Widget", "description": "large", "price": 5.0, "is_offer": true})
    );

    // null on a required field is ignored, on an optional one it clears
    let (status, body) = send(&app, json_request("PUT", "/items/1", &json!({"price": null, "is_offer": null}))?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], json!(5.0));
    assert_eq!(body["is_offer"], Value::Null);

    let (status, body) = send(&app, json_request("PUT", "/items/1", &json!({"price": 0}))?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], json!(0.0));
    Ok(())
}

#[tokio::test]
async fn invalid_update_is_rejected_without_mutation() -> anyhow::Result<()> {
    let app = build_app()?;
    let (_, created) = send(&app, json_request("POST", "/items", &json!({"name": "Widget", "price": 5.0}))?).await?;

    let (status, _) = send(&app, json_request("PUT", "/items/1", &json!({"name": "Gadget", "price": -2}))?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, json_request("PUT", "/items/1", &json!({"name": ""}))?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, empty_request("GET", "/items/1")?).await?;
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_404_and_leave_store_alone() -> anyhow::Result<()> {
    let app = build_app()?;
    send(&app, json_request("POST", "/items", &json!({"name": "Widget", "price": 5.0}))?).await?;

    let (status, _) = send(&app, empty_request("GET", "/items/99")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, json_request("PUT", "/items/99", &json!({"price": -1}))?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, empty_request("DELETE", "/items/99")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, empty_request("GET", "/items")?).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn integers_outside_id_range_are_404() -> anyhow::Result<()> {
    let app = build_app()?;
    send(&app, json_request("POST", "/items", &json!({"name": "Widget", "price": 5.0}))?).await?;

    let (status, body) = send(&app, empty_request("GET", "/items/-1")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item with ID -1 not found");

    let (status, _) = send(&app, json_request("PUT", "/items/-1", &json!({"price": 1.0}))?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request("DELETE", "/items/-1")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request("GET", "/items/99999999999999999999999")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request("GET", "/items/1.5")?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = send(&app, empty_request("GET", "/items")?).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn malformed_input_is_422() -> anyhow::Result<()> {
    let app = build_app()?;

    let (status, _) = send(&app, json_request("POST", "/items", &json!({"name": "Widget"}))?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, json_request("POST", "/items", &json!({"name": "Widget", "price": "cheap"}))?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let req = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unprocessable Entity");

    let (status, _) = send(&app, empty_request("GET", "/items/abc")?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let req = Request::builder().method("POST").uri("/items").body(Body::from(r#"{"name":"Widget","price":1.0}"#))?;
    let (status, _) = send(&app, req).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let req = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=Widget&price=1.0"))?;
    let (status, _) = send(&app, req).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = send(&app, empty_request("GET", "/items")?).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn health_metrics_and_openapi() -> anyhow::Result<()> {
    let app = build_app()?;

    let (status, body) = send(&app, empty_request("GET", "/health")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, empty_request("GET", "/openapi.json")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Item Management API");
    assert!(doc["paths"]["/items/{id}"].is_object());

    send(&app, json_request("POST", "/items", &json!({"name": "Widget", "price": 1.0}))?).await?;
    let resp = app.clone().call(empty_request("GET", "/metrics")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(resp.into_body(), usize::MAX).await?.to_vec())?;
    assert!(text.contains("item_api_items_created_total"));
    assert!(text.contains("item_api_not_found_total"));
    Ok(())
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin_only() -> anyhow::Result<()> {
    let app = build_app()?;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/items")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "DELETE")
        .header("access-control-request-headers", "content-type,x-custom")
        .body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    let headers = resp.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:3000");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "DELETE");
    assert_eq!(headers["access-control-allow-headers"], "content-type,x-custom");

    let req = Request::builder()
        .method("GET")
        .uri("/items")
        .header("origin", "http://evil.example")
        .body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("access-control-allow-origin").is_none());
    Ok(())
}
