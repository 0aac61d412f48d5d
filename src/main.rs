//! item-server: HTTP front end of the item service

use clap::Parser;
use item_service::server::builder::{load_config, run_server};
use item_service::utils::logging::{bootstrap_logging, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// Item service HTTP server
#[derive(Debug, Parser)]
#[command(name = "item-server", version, about)]
struct Args {
    /// Configuration file (defaults to config/service.yaml when present)
    #[arg(short, long, env = "ITEM_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let loaded = {
        let _guard = bootstrap_logging();
        load_config(args.config).await
    };

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(host) = args.host {
        config.service.server.host = host;
    }
    if let Some(port) = args.port {
        config.service.server.port = port;
    }

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
