use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use service::item::ItemStore;
use tower::Service;
use tower_http::cors::CorsLayer;

use server::routes;

fn app() -> Router {
    routes::build_router(ItemStore::new(), CorsLayer::very_permissive())
}

#[tokio::test]
async fn unknown_route_returns_404() -> anyhow::Result<()> {
    let req = Request::builder().uri("/api/unknown").body(Body::empty())?;
    let resp = app().call(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unsupported_method_returns_405() -> anyhow::Result<()> {
    let req = Request::builder()
        .method("PATCH")
        .uri("/api/items")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&json!({"name": "x"}))?))?;
    let resp = app().call(req).await?;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}

#[tokio::test]
async fn malformed_json_body_returns_400() -> anyhow::Result<()> {
    let req = Request::builder()
        .method("POST")
        .uri("/api/items")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn missing_content_type_returns_400() -> anyhow::Result<()> {
    // A JSON body without the JSON content type is still a client error,
    // not axum's default 415.
    let req = Request::builder()
        .method("POST")
        .uri("/api/items")
        .body(Body::from(serde_json::to_vec(&json!({"name": "x"}))?))?;
    let resp = app().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn empty_body_returns_400() -> anyhow::Result<()> {
    let req = Request::builder()
        .method("POST")
        .uri("/api/items")
        .header("content-type", "application/json")
        .body(Body::empty())?;
    let resp = app().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn responses_carry_cors_headers() -> anyhow::Result<()> {
    let req = Request::builder()
        .uri("/api/items")
        .header("origin", "http://example.com")
        .body(Body::empty())?;
    let resp = app().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let allow_origin = resp
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allow_origin, Some("http://example.com"));
    Ok(())
}
