use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::{build_http_client, ensure_success};
use crate::config::Config;
use crate::engine::script::TransformScript;
use crate::error::Result;
use crate::models::hookdeck::{
    Connection, Destination, DestinationConfig, Rule, Source, SourceAuth, SourceConfig,
    Transformation, UpsertConnection, UpsertDestination, UpsertSource,
};

const SERVICE: &str = "Hookdeck";

pub const TRANSFORMATION_NAME: &str = "github-star-to-posthog-capture";

/// Relay API client. Every write is a PUT keyed by resource name, so calling
/// any method twice converges on the same resource.
#[derive(Clone)]
pub struct HookdeckClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HookdeckClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: config.hookdeck_api_url.trim_end_matches('/').to_string(),
            api_key: config.hookdeck_api_key.clone(),
        })
    }

    pub async fn upsert_source(&self, config: &Config) -> Result<Source> {
        let body = UpsertSource {
            name: config.source_name(),
            source_type: "GITHUB".to_string(),
            config: SourceConfig {
                auth: SourceAuth {
                    webhook_secret_key: config.github_webhook_secret.clone(),
                },
            },
        };

        let source: Source = self.put("sources", &body).await?;
        info!("Hookdeck source ready: {}", source.id);
        info!("Source URL: {}", source.url);
        Ok(source)
    }

    pub async fn upsert_destination(&self, config: &Config) -> Result<Destination> {
        let body = UpsertDestination {
            name: config.destination_name(),
            config: DestinationConfig {
                url: config.posthog_capture_url(),
            },
        };

        let destination: Destination = self.put("destinations", &body).await?;
        info!("Hookdeck destination ready: {}", destination.id);
        Ok(destination)
    }

    pub async fn upsert_connection(
        &self,
        config: &Config,
        source_id: &str,
        destination_id: &str,
        script: &TransformScript,
    ) -> Result<Connection> {
        let env = BTreeMap::from([(
            "POSTHOG_API_KEY".to_string(),
            config.posthog_api_key.clone(),
        )]);

        let body = UpsertConnection {
            name: config.connection_name(),
            source_id: source_id.to_string(),
            destination_id: destination_id.to_string(),
            rules: vec![Rule::Transform {
                transformation: Transformation {
                    name: TRANSFORMATION_NAME.to_string(),
                    code: script.code().to_string(),
                    env,
                },
            }],
        };

        let connection: Connection = self.put("connections", &body).await?;
        info!("Hookdeck connection ready: {}", connection.id);
        Ok(connection)
    }

    async fn put<B, T>(&self, resource: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, resource);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let response = ensure_success(SERVICE, response).await?;
        Ok(response.json().await?)
    }
}
