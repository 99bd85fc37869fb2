use axum::{routing::get, Router};
use std::sync::Arc;
use super::handlers;
use super::AppState;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // The whole site is one page
        .route("/", get(handlers::directory::index))
        .with_state(state)
}
