//! Wire model for the Slack `users.list` response.
//!
//! Decoding is permissive: unknown fields are ignored and missing fields
//! fall back to empty values, since Slack omits most profile fields for
//! bots and restricted accounts.

use serde::Deserialize;

/// Payload rendered into the index page: the workspace id from
/// configuration plus the members fetched from the directory API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberList {
    /// Set from configuration after the fetch, never from upstream JSON.
    #[allow(dead_code)]
    #[serde(skip)]
    pub team: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// One entry of the `users.list` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "image_192")]
    pub image: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[allow(dead_code)]
    #[serde(default, rename = "status_text")]
    pub status: String,
}

impl Member {
    /// Name shown on the card: the profile real name when present,
    /// otherwise the account name.
    pub fn display_name(&self) -> &str {
        if self.profile.real_name.is_empty() {
            &self.name
        } else {
            &self.profile.real_name
        }
    }
}
