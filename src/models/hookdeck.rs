use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,

    /// Public ingestion URL that GitHub delivers to.
    pub url: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub config: Option<DestinationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UpsertSource {
    pub name: String,

    #[serde(rename = "type")]
    pub source_type: String,

    pub config: SourceConfig,
}

#[derive(Debug, Serialize)]
pub struct SourceConfig {
    pub auth: SourceAuth,
}

#[derive(Debug, Serialize)]
pub struct SourceAuth {
    pub webhook_secret_key: String,
}

#[derive(Debug, Serialize)]
pub struct UpsertDestination {
    pub name: String,
    pub config: DestinationConfig,
}

#[derive(Debug, Serialize)]
pub struct UpsertConnection {
    pub name: String,
    pub source_id: String,
    pub destination_id: String,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Rule {
    Transform { transformation: Transformation },
}

#[derive(Debug, Serialize)]
pub struct Transformation {
    pub name: String,
    pub code: String,

    /// Variables exposed to the script as `process.env` inside the relay sandbox.
    pub env: BTreeMap<String, String>,
}
