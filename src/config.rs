use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub slack: SlackConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// Workspace API token, sent as the query credential on users.list.
    /// Set FACELIST__SLACK__API_TOKEN.
    #[serde(default)]
    pub api_token: String,
    /// Workspace id carried on the rendered member list.
    /// Set FACELIST__SLACK__TEAM.
    #[serde(default)]
    pub team: String,
    /// Only members whose email ends with this suffix appear on the page.
    /// The empty default shows everyone.
    #[serde(default)]
    pub email_filter: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_port() -> u16 { 8000 }
fn default_bind() -> String { "0.0.0.0".to_string() }
fn default_api_url() -> String { "https://slack.com/api".to_string() }
fn default_fetch_timeout() -> u64 { 30 }

pub fn validate(cfg: &Config) -> Result<()> {
    if cfg.slack.team.is_empty() {
        anyhow::bail!(
            "CONFIG ERROR: Slack team is not set. \
            Set the FACELIST__SLACK__TEAM environment variable to your workspace id."
        );
    }

    if cfg.slack.api_token.is_empty() {
        anyhow::bail!(
            "CONFIG ERROR: Slack API token is not set. \
            Set the FACELIST__SLACK__API_TOKEN environment variable."
        );
    }

    if cfg.slack.api_url.is_empty() {
        anyhow::bail!("CONFIG ERROR: Slack API URL must not be empty");
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}

pub fn load() -> Result<Config> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("FACELIST").separator("__"))
        .set_default("server.bind", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("slack.api_token", "")?
        .set_default("slack.team", "")?
        .set_default("slack.email_filter", "")?
        .set_default("slack.api_url", "https://slack.com/api")?
        .set_default("slack.fetch_timeout_secs", 30)?
        .build()?
        .try_deserialize()?;

    validate(&cfg)?;

    Ok(cfg)
}
