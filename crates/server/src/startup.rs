use std::future::Future;

use axum::{http::HeaderValue, Router};
use configs::{AppConfig, CorsConfig};
use service::items::ItemStore;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

use crate::{metrics, routes};

/// CORS for the configured origins with credentials. Methods and headers are
/// mirrored from the preflight since `*` is not allowed alongside credentials.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Build the router around a fresh, empty item store.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    metrics::init();
    let state = routes::AppState::new(ItemStore::new());
    Ok(routes::build_router(state, build_cors(&cfg.cors)?))
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg)?;
    let addr = cfg.server.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, origins = ?cfg.cors.allowed_origins, "item api listening");
    serve(listener, app, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
        }
    })
    .await
}
