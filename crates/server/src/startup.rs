use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use service::item::ItemStore;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;

/// Initialize logging via the shared common utils.
fn init_logging() {
    init_logging_default();
}

/// The API is a reference backend; any origin may call it.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve the listen address: config file if present, `PORT`/`SERVER_HOST`
/// environment on top, `0.0.0.0:5000` when neither says otherwise.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let cfg = configs::AppConfig::load_and_validate()?;
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // The store is the process-wide state: empty at startup, discarded at
    // exit.
    let store = ItemStore::new();

    let cors = build_cors();
    let app: Router = routes::build_router(store, cors);

    let addr = load_bind_addr()?;
    info!(%addr, "starting item-api server");
    println!("item-api listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
