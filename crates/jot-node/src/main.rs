//! Jot Node - Collaborative note server with live presence.
//!
//! This is the main entry point for running a Jot node.

use clap::Parser;
use jot_auth::AuthStore;
use jot_node::api::{create_router, AppState};
use jot_node::config::Config;
use jot_node::observability::init_logging;
use jot_realtime::{EventHub, EventRouter};
use jot_store::NoteStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Jot Node - collaborative notes with real-time presence
#[derive(Parser, Debug)]
#[command(name = "jot-node")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// API listen address (overrides config)
    #[arg(long)]
    api_addr: Option<SocketAddr>,

    /// Log level (trace, debug, info, warn, error; overrides config)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(api_addr) = args.api_addr {
        config.api_addr = api_addr;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }
    if args.log_json {
        config.log_json = true;
    }

    init_logging(&config.log_level, config.log_json);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Jot node");

    let hub = Arc::new(EventHub::new());
    let state = AppState {
        notes: Arc::new(NoteStore::new()),
        auth: Arc::new(AuthStore::new()),
        realtime: Arc::new(EventRouter::new(hub)),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.api_addr).await?;
    tracing::info!(api_addr = %config.api_addr, "Jot node listening");

    axum::serve(listener, app).await?;

    Ok(())
}
