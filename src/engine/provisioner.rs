use tracing::{debug, info};

use crate::config::Config;
use crate::engine::script::TransformScript;
use crate::error::Result;
use crate::models::github::WebhookSync;
use crate::services::{GitHubClient, HookdeckClient};

/// Ids of everything a successful run touched.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub source_id: String,
    pub source_url: String,
    pub destination_id: String,
    pub connection_id: String,
    pub webhook: WebhookSync,
}

pub struct Provisioner<'a> {
    config: &'a Config,
    hookdeck: HookdeckClient,
    github: GitHubClient,
}

impl<'a> Provisioner<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            hookdeck: HookdeckClient::new(config)?,
            github: GitHubClient::new(config)?,
        })
    }

    /// Source, destination, connection, then the GitHub webhook. Stops at the
    /// first failure; earlier steps stay applied and a rerun converges.
    pub async fn run(&self) -> Result<PipelineReport> {
        info!(
            "Setting up the GitHub -> Hookdeck -> PostHog pipeline for {}",
            self.config.github_repo()
        );

        let source = self.hookdeck.upsert_source(self.config).await?;
        let destination = self.hookdeck.upsert_destination(self.config).await?;

        let script = TransformScript::load(&self.config.transform_script_path)?;
        debug!("Using transform script {}", script.path().display());
        let connection = self
            .hookdeck
            .upsert_connection(self.config, &source.id, &destination.id, &script)
            .await?;

        let webhook = self.github.sync_star_webhook(&source.url).await?;
        match webhook {
            WebhookSync::Created(id) => info!(
                "GitHub webhook {} created for repository {}",
                id,
                self.config.github_repo()
            ),
            WebhookSync::Updated(id) => info!(
                "GitHub webhook {} updated for repository {}",
                id,
                self.config.github_repo()
            ),
        }

        info!("Webhook pipeline successfully set up");

        Ok(PipelineReport {
            source_id: source.id,
            source_url: source.url,
            destination_id: destination.id,
            connection_id: connection.id,
            webhook,
        })
    }
}
