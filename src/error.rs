use thiserror::Error;

/// Body sent when the page fails to render. The underlying error is
/// logged server-side and never shown to the visitor.
pub const RENDER_FAILURE_BODY: &str = "Oops. That's embarrassing. Please try again later.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("Upstream response too large: {0} bytes")]
    ResponseTooLarge(u64),

    #[error("Failed to decode member list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to render page: {0}")]
    Render(#[from] std::fmt::Error),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        // Every failure mode aborts the page; there is no partial output.
        let message = match &self {
            AppError::Render(err) => {
                tracing::error!("Failed to render index page: {}", err);
                RENDER_FAILURE_BODY.to_string()
            }
            _ => self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
