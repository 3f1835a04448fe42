//! Request router demo binary.
//!
//! Assembles the handler chain from a TOML config (or the built-in image
//! chain) and evaluates requests against it from the command line.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use request_router::config::{self, RouterConfig};
use request_router::http::Request;
use request_router::observability;
use request_router::stages;
use request_router::storage::InMemoryImageStore;

#[derive(Parser)]
#[command(name = "request-router")]
#[command(about = "Chain-of-responsibility request router", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults to the built-in image chain.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and print the assembled chain
    Check,
    /// Evaluate a single request against the chain
    Handle {
        /// HTTP method (GET, PUT, POST, ...)
        method: String,
        /// Request path, e.g. api/images/5
        path: String,
        /// Optional request body
        #[arg(short, long)]
        body: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => {
            let config = RouterConfig::default();
            config::validate_config(&config)?;
            config
        }
    };

    observability::logging::init(&config.observability.log_filter);

    let store = Arc::new(InMemoryImageStore::new());
    let router = stages::build_chain(&config, store)?;

    tracing::info!(stages = router.len(), "chain assembled");

    match cli.command {
        Commands::Check => {
            println!("chain ok: {}", router.stage_names().join(" -> "));
        }
        Commands::Handle { method, path, body } => {
            let method: http::Method = method.to_uppercase().parse()?;
            let request = match body {
                Some(body) => Request::with_body(method, path, body),
                None => Request::new(method, path),
            };

            let response = router.handle(&request)?;

            let rendered = serde_json::json!({
                "status": response.status().as_u16(),
                "body": response
                    .body()
                    .map(|b| String::from_utf8_lossy(b).into_owned()),
                "location": response.location(),
            });
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
    }

    Ok(())
}
