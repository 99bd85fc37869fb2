//! Slack Web API client.
//!
//! One call is used: `users.list`, with the workspace token passed as a
//! query credential. The client is built once at startup and shared.

use anyhow::Context;

use crate::config::SlackConfig;
use crate::directory::model::MemberList;
use crate::error::{AppError, AppResult};

/// Maximum accepted `users.list` response size (10 MB)
const MAX_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl SlackClient {
    pub fn new(cfg: &SlackConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.fetch_timeout_secs))
            .user_agent(concat!("facelist/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            api_url: cfg.api_url.trim_end_matches('/').to_string(),
            token: cfg.api_token.clone(),
        })
    }

    /// Fetch the full member list for the workspace.
    /// The returned list carries no team id; the caller attaches it.
    pub async fn users_list(&self) -> AppResult<MemberList> {
        tracing::debug!("Fetching member list from {}/users.list", self.api_url);

        let url = format!("{}/users.list?token={}", self.api_url, self.token);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus(response.status()));
        }

        // Reject early using Content-Length before reading any body
        if let Some(len) = response.content_length() {
            if len > MAX_RESPONSE_SIZE {
                return Err(AppError::ResponseTooLarge(len));
            }
        }

        let bytes = response.bytes().await?;
        if bytes.len() as u64 > MAX_RESPONSE_SIZE {
            return Err(AppError::ResponseTooLarge(bytes.len() as u64));
        }

        let list: MemberList = serde_json::from_slice(&bytes)?;
        Ok(list)
    }
}
