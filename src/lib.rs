pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, ProvisionError};
