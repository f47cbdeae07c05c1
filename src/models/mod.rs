pub mod capture;
pub mod github;
pub mod hookdeck;
pub mod star;

pub use capture::{CaptureEvent, CaptureProperties};
pub use github::{GitHubWebhook, WebhookPayload, WebhookSync};
pub use hookdeck::{Connection, Destination, Source};
pub use star::{GitHubStarEvent, RelayRequest};
