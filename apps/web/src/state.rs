use std::sync::Arc;

use crate::config::Config;
use crate::models::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page content. Read-only for the lifetime of the process.
    pub portfolio: Arc<Portfolio>,
}
