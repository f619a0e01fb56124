mod config;
mod content;
mod errors;
mod export;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::export_site;
use crate::render::render_page;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let portfolio = Arc::new(content::portfolio());
    info!(
        "Content loaded: {} skill groups, {} projects, {} certifications",
        portfolio.skills.len(),
        portfolio.projects.len(),
        portfolio.certifications.len()
    );

    // Static export: render once, write page and assets, exit.
    if let Some(path) = &config.export_path {
        export_site(path, &render_page(&portfolio)?, &config.assets_dir).await?;
        return Ok(());
    }

    let state = AppState {
        config: config.clone(),
        portfolio,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.port).parse()?;
    info!("Serving assets from {}", config.assets_dir.display());
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
