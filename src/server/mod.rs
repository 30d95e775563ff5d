use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ReaderConfig;

pub mod routes;
pub mod views;

pub use views::Views;

/// Server state, shared read-only across requests
pub struct AppState {
    pub config: ReaderConfig,
    pub views: Views,
}

impl AppState {
    pub fn new(config: ReaderConfig) -> crate::Result<Self> {
        Ok(Self {
            config,
            views: Views::new()?,
        })
    }
}

/// Build the reader's router: index, chapter pages and the static mount.
pub fn build_router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);
    let static_path = state.config.static_url_path.clone();

    Router::new()
        .route("/", get(routes::index))
        .route("/chap/{n}", get(routes::chapter))
        .nest_service(&static_path, assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: ReaderConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = tokio::net::lookup_host(config.bind_address())
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("cannot resolve {}", config.bind_address()))?;

    tracing::info!("Chapters: {}", config.chapters_dir.display());
    tracing::info!(
        "Static: {} -> {}",
        config.static_url_path,
        config.static_dir.display()
    );

    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    tracing::info!("Starting server on {}", addr);
    println!("📖 Reader running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
