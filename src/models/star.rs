use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// GitHub `star` webhook payload. Only the fields the transform reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubStarEvent {
    /// "created" or "deleted"
    pub action: String,

    /// Present only when `action` is "created". Kept as the raw string so it
    /// is forwarded byte for byte.
    #[serde(default)]
    pub starred_at: Option<String>,

    pub repository: StarRepository,

    pub sender: StarSender,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarRepository {
    pub id: u64,
    pub full_name: String,
    pub html_url: String,
    pub stargazers_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarSender {
    pub login: String,
    pub html_url: String,
}

/// The request envelope the relay hands to a transform handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    #[serde(default)]
    pub body: serde_json::Value,
}
