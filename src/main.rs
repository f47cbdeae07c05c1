use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gh_stars_pipeline::engine::{transform_request, transform_star_event, Provisioner};
use gh_stars_pipeline::models::{GitHubStarEvent, RelayRequest};
use gh_stars_pipeline::Config;

/// Forward GitHub star events to PostHog through a Hookdeck connection.
#[derive(Parser)]
#[command(name = "gh-stars-pipeline")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update the Hookdeck source, destination, connection and GitHub webhook
    Setup,

    /// Run the star transform locally on a payload and print the result
    Transform {
        /// JSON payload file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Treat the input as a relay request envelope ({headers, body})
        #[arg(long)]
        envelope: bool,

        /// PostHog project API key placed in the output
        #[arg(long, env = "POSTHOG_API_KEY", hide_env_values = true)]
        api_key: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command.unwrap_or(Commands::Setup) {
        Commands::Setup => setup().await,
        Commands::Transform {
            input,
            envelope,
            api_key,
        } => transform(input, envelope, &api_key),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "gh_stars_pipeline=debug"
    } else {
        "gh_stars_pipeline=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn setup() -> Result<()> {
    info!("gh-stars-pipeline v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let report = Provisioner::new(&config)?
        .run()
        .await
        .context("Pipeline setup failed")?;

    info!(
        "Source {} -> destination {} via connection {} (webhook {})",
        report.source_id,
        report.destination_id,
        report.connection_id,
        report.webhook.id()
    );
    Ok(())
}

fn transform(input: Option<PathBuf>, envelope: bool, api_key: &str) -> Result<()> {
    let raw = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let output = if envelope {
        let request: RelayRequest = serde_json::from_str(&raw).context("Invalid relay request")?;
        serde_json::to_string_pretty(&transform_request(request, api_key)?)?
    } else {
        let event: GitHubStarEvent = serde_json::from_str(&raw).context("Invalid star event")?;
        serde_json::to_string_pretty(&transform_star_event(&event, api_key))?
    };

    println!("{}", output);
    Ok(())
}
