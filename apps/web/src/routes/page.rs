use axum::{extract::State, response::Html, Json};

use crate::errors::AppError;
use crate::models::Portfolio;
use crate::render::render_page;
use crate::state::AppState;

/// GET /
/// Renders the page from the shared content on every request.
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_page(&state.portfolio)?;
    Ok(Html(html))
}

/// GET /api/v1/portfolio
pub async fn handle_portfolio_json(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}
