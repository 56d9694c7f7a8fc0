//! Porcana API - HTTP server for users, decks and cards.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_lib::config::ApiConfig;

#[derive(Parser)]
#[command(name = "porcana-api")]
#[command(author, version, about = "Porcana backend API", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, env = "SERVER_HOST")]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long, env = "SERVER_PORT")]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ApiConfig::from_env();
    let cli = Cli::parse();

    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }

            if let Err(e) = api_lib::run_server(config).await {
                tracing::error!("Server failed: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}

/// Initialize tracing subscriber (verbose mode forces debug level)
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
