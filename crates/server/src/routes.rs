use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{ApiInfo, Health};
use service::item::ItemStore;

pub mod items;

pub async fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Welcome to item-api API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: welcome/health plus the item CRUD API,
/// with CORS and per-request tracing applied to everything.
pub fn build_router(store: ItemStore, cors: CorsLayer) -> Router {
    // Public routes (welcome + health)
    let public = Router::new()
        .route("/", get(index))
        .route("/health", get(health));

    // Item API routes
    let api = Router::new()
        .route("/api/items", get(items::list).post(items::create))
        .route(
            "/api/items/:id",
            get(items::get).put(items::update).delete(items::delete),
        );

    // Compose
    public
        .merge(api)
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request, carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // response events include status and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
