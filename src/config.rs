use std::path::PathBuf;

use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_HOOKDECK_API_URL: &str = "https://api.hookdeck.com/2025-01-01";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TRANSFORM_SCRIPT_PATH: &str = "transform/github-star-to-posthog.js";

const REQUIRED_VARS: [&str; 7] = [
    "GITHUB_TOKEN",
    "HOOKDECK_API_KEY",
    "POSTHOG_API_KEY",
    "POSTHOG_HOST",
    "REPO_OWNER",
    "REPO_NAME",
    "GITHUB_WEBHOOK_SECRET",
];

/// Settings for one provisioning run, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub hookdeck_api_key: String,
    pub posthog_api_key: String,
    pub posthog_host: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub github_webhook_secret: String,

    pub hookdeck_api_url: String,
    pub github_api_url: String,
    pub transform_script_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Every missing required
    /// key is reported at once; blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|&key| get(key).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(vec![key]));

        let config = Self {
            github_token: required("GITHUB_TOKEN")?,
            hookdeck_api_key: required("HOOKDECK_API_KEY")?,
            posthog_api_key: required("POSTHOG_API_KEY")?,
            posthog_host: required("POSTHOG_HOST")?,
            repo_owner: required("REPO_OWNER")?,
            repo_name: required("REPO_NAME")?,
            github_webhook_secret: required("GITHUB_WEBHOOK_SECRET")?,
            hookdeck_api_url: get("HOOKDECK_API_URL")
                .unwrap_or_else(|| DEFAULT_HOOKDECK_API_URL.to_string()),
            github_api_url: get("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            transform_script_path: get("TRANSFORM_SCRIPT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSFORM_SCRIPT_PATH)),
        };

        debug!("Relay API: {}", config.hookdeck_api_url);
        debug!("GitHub API: {}", config.github_api_url);
        debug!("Repository: {}", config.github_repo());

        Ok(config)
    }

    /// `owner/name`
    pub fn github_repo(&self) -> String {
        format!("{}/{}", self.repo_owner, self.repo_name)
    }

    fn safe_repo_name(&self) -> String {
        self.github_repo().replacen('/', "-", 1)
    }

    pub fn source_name(&self) -> String {
        format!("gh-stars-src-{}", self.safe_repo_name())
    }

    pub fn destination_name(&self) -> String {
        format!("posthog-{}", self.safe_repo_name())
    }

    pub fn connection_name(&self) -> String {
        format!("gh-stars-conn-{}", self.safe_repo_name())
    }

    pub fn posthog_capture_url(&self) -> String {
        format!("{}/i/v0/e/", self.posthog_host.trim_end_matches('/'))
    }
}
