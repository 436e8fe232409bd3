//! Registro CLI
//!
//! Command-line front end for the lead registration form.
//!
//! # Usage
//!
//! ```bash
//! registro probe
//! registro validate --nombre "Ana" --cedula 12345678 --telefono 3001234567 \
//!     --email ana@x.com --monto 50000
//! registro submit --nombre "Ana" --cedula 12345678 --telefono 300-123-4567 \
//!     --email ana@x.com --monto 50000
//! registro config set api_url http://localhost:8080
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::lead::LeadArgs;

const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(name = "registro")]
#[command(version, about = "Registro Command Line Interface", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "REGISTRO_API_URL")]
    api_url: Option<String>,

    /// Output format
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the intake endpoint is alive
    Probe,
    /// Check a lead against the form rules without sending it
    Validate(LeadArgs),
    /// Fill the form and submit it to the intake endpoint
    Submit(LeadArgs),
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        output::failure(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let profile = cli.profile.as_deref();
    let config = config::Config::load(profile)?;

    let api_url = cli
        .api_url
        .or(config.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let format = cli
        .format
        .or_else(|| config.default_format.as_deref().and_then(output::OutputFormat::from_config))
        .unwrap_or(output::OutputFormat::Table);
    let endpoint = commands::endpoint(&api_url);

    match cli.command {
        Commands::Probe => commands::probe::handle(endpoint, format).await,
        Commands::Validate(args) => commands::lead::validate_cmd(&args, format),
        Commands::Submit(args) => commands::lead::submit_cmd(&args, endpoint, format).await,
        Commands::Config { action } => commands::config::handle(action, profile),
    }
}
