use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::directory::slack::SlackClient;

pub mod handlers;
pub mod router;

pub struct AppState {
    pub slack: SlackClient,
    /// Workspace id attached to the rendered member list.
    pub team: String,
    /// Email suffix members must match to appear on the page.
    pub email_filter: String,
}

pub async fn serve(cfg: Config) -> Result<()> {
    let bind_addr = format!("{}:{}", cfg.server.bind, cfg.server.port);
    let slack = SlackClient::new(&cfg.slack)?;
    let state = Arc::new(AppState {
        slack,
        team: cfg.slack.team,
        email_filter: cfg.slack.email_filter,
    });
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Facelist listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(router::routes(state))
        .layer(TraceLayer::new_for_http())
}
