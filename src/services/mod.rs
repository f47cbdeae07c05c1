pub mod github;
pub mod hookdeck;

pub use github::GitHubClient;
pub use hookdeck::HookdeckClient;

use reqwest::{Client, Response};
use tracing::debug;

use crate::error::{ProvisionError, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_http_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Passes 2xx responses through; anything else becomes `ProvisionError::Api`
/// carrying the raw response body.
pub(crate) async fn ensure_success(service: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!("{} API returned {}: {}", service, status, body);

    Err(ProvisionError::Api {
        service,
        status,
        body,
    })
}
