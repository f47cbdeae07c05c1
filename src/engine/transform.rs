use crate::models::capture::{CaptureEvent, CaptureProperties, CAPTURE_EVENT_NAME};
use crate::models::star::{GitHubStarEvent, RelayRequest};

/// Maps a star webhook into an analytics capture event. Mirrors the relay
/// script in `transform/github-star-to-posthog.js`.
pub fn transform_star_event(event: &GitHubStarEvent, api_key: &str) -> CaptureEvent {
    // Only "created" counts up; every other action counts down.
    let count = if event.action == "created" { 1 } else { -1 };

    CaptureEvent {
        event: CAPTURE_EVENT_NAME.to_string(),
        api_key: api_key.to_string(),
        distinct_id: event.sender.login.clone(),
        properties: CaptureProperties {
            repo_name: event.repository.full_name.clone(),
            repo_url: event.repository.html_url.clone(),
            stargazer_username: event.sender.login.clone(),
            stargazer_profile: event.sender.html_url.clone(),
            star_count: event.repository.stargazers_count,
            action: event.action.clone(),
            starred_at: event.starred_at.clone().filter(|s| !s.is_empty()),
            count,
        },
    }
}

/// Replaces the envelope body with the capture event. Headers pass through.
pub fn transform_request(
    mut request: RelayRequest,
    api_key: &str,
) -> Result<RelayRequest, serde_json::Error> {
    let event: GitHubStarEvent = serde_json::from_value(request.body.take())?;
    request.body = serde_json::to_value(transform_star_event(&event, api_key))?;
    Ok(request)
}
