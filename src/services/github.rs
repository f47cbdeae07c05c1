use reqwest::{Client, RequestBuilder};
use tracing::{info, warn};

use super::{build_http_client, ensure_success};
use crate::config::Config;
use crate::error::Result;
use crate::models::github::{GitHubWebhook, WebhookPayload, WebhookSync};

const SERVICE: &str = "GitHub";
const ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    hooks_url: String,
    token: String,
    webhook_secret: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            hooks_url: format!(
                "{}/repos/{}/hooks",
                config.github_api_url.trim_end_matches('/'),
                config.github_repo()
            ),
            token: config.github_token.clone(),
            webhook_secret: config.github_webhook_secret.clone(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT)
    }

    pub async fn list_webhooks(&self) -> Result<Vec<GitHubWebhook>> {
        let response = self
            .authorized(self.client.get(&self.hooks_url))
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        Ok(response.json().await?)
    }

    /// First hook named "web" subscribed to `star`. A failed lookup is
    /// reported as `None`, which can lead to a duplicate hook if the failure
    /// was transient.
    pub async fn find_star_webhook(&self) -> Option<GitHubWebhook> {
        match self.list_webhooks().await {
            Ok(hooks) => hooks.into_iter().find(GitHubWebhook::is_star_hook),
            Err(err) => {
                warn!("Failed to check for existing webhooks: {}", err);
                None
            }
        }
    }

    pub async fn create_webhook(&self, payload: &WebhookPayload) -> Result<u64> {
        let response = self
            .authorized(self.client.post(&self.hooks_url))
            .json(payload)
            .send()
            .await?;
        self.hook_id(response).await
    }

    pub async fn update_webhook(&self, id: u64, payload: &WebhookPayload) -> Result<u64> {
        let url = format!("{}/{}", self.hooks_url, id);
        let response = self
            .authorized(self.client.patch(&url))
            .json(payload)
            .send()
            .await?;
        self.hook_id(response).await
    }

    async fn hook_id(&self, response: reqwest::Response) -> Result<u64> {
        let response = ensure_success(SERVICE, response).await?;
        let hook: GitHubWebhook = response.json().await?;
        Ok(hook.id)
    }

    /// Points the repository's star webhook at `source_url`, updating the
    /// existing hook in place when one is found.
    pub async fn sync_star_webhook(&self, source_url: &str) -> Result<WebhookSync> {
        let existing = self.find_star_webhook().await;
        let payload = WebhookPayload::star(source_url, &self.webhook_secret);

        let sync = match existing {
            Some(hook) => {
                info!("Updating existing GitHub webhook (ID: {})", hook.id);
                WebhookSync::Updated(self.update_webhook(hook.id, &payload).await?)
            }
            None => {
                info!("Creating new GitHub webhook");
                WebhookSync::Created(self.create_webhook(&payload).await?)
            }
        };

        Ok(sync)
    }
}
