use serde::{Deserialize, Serialize};

pub const CAPTURE_EVENT_NAME: &str = "GitHub Star";

/// Analytics capture payload posted to the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureEvent {
    pub event: String,
    pub api_key: String,
    pub distinct_id: String,
    pub properties: CaptureProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureProperties {
    pub repo_name: String,
    pub repo_url: String,
    pub stargazer_username: String,
    pub stargazer_profile: String,
    pub star_count: u64,
    pub action: String,

    /// Serialized as `null` when absent, never omitted.
    pub starred_at: Option<String>,

    /// +1 for a new star, -1 otherwise.
    pub count: i32,
}
