use serde::{Deserialize, Serialize};

pub const STAR_EVENT: &str = "star";

/// GitHub's fixed name for repository webhooks.
pub const DEFAULT_HOOK_NAME: &str = "web";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubWebhook {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub events: Vec<String>,

    #[serde(default)]
    pub config: Option<WebhookConfig>,
}

impl GitHubWebhook {
    pub fn is_star_hook(&self) -> bool {
        self.name == DEFAULT_HOOK_NAME && self.events.iter().any(|e| e == STAR_EVENT)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure_ssl: Option<String>,
}

/// Body shared by the create and update hook calls.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub name: String,
    pub active: bool,
    pub events: Vec<String>,
    pub config: WebhookConfig,
}

impl WebhookPayload {
    pub fn star(url: &str, secret: &str) -> Self {
        Self {
            name: DEFAULT_HOOK_NAME.to_string(),
            active: true,
            events: vec![STAR_EVENT.to_string()],
            config: WebhookConfig {
                url: Some(url.to_string()),
                content_type: Some("json".to_string()),
                secret: Some(secret.to_string()),
                insecure_ssl: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookSync {
    Created(u64),
    Updated(u64),
}

impl WebhookSync {
    pub fn id(&self) -> u64 {
        match self {
            WebhookSync::Created(id) | WebhookSync::Updated(id) => *id,
        }
    }
}
