pub mod health;
pub mod page;

use axum::{extract::OriginalUri, handler::HandlerWithoutStateExt, routing::get, Router};
use tower_http::services::ServeDir;

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(OriginalUri(uri): OriginalUri) -> Result<(), AppError> {
    Err(AppError::NotFound(format!("No route for {}", uri.path())))
}

pub fn build_router(state: AppState) -> Router {
    // Missing assets get the same JSON 404 as unknown routes.
    let assets =
        ServeDir::new(&state.config.assets_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/portfolio", get(page::handle_portfolio_json))
        .nest_service("/assets", assets)
        .fallback(not_found)
        .with_state(state)
}
