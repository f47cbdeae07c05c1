use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Fatal conditions of a provisioning run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{service} API error: {status} - {body}")]
    Api {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transform script {}: {reason}", .path.display())]
    Artifact { path: PathBuf, reason: String },
}

pub type Result<T, E = ProvisionError> = std::result::Result<T, E>;
