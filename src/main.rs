use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use imgrid::config;
use imgrid::server::{self, AppState};
use imgrid::{log_debug, DEBUG_MODE};

/// Local Image Gallery Browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder whose images the gallery browses
    folder: PathBuf,

    /// Address to bind (overrides config, default 127.0.0.1)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides config, default 8080)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to the system temp directory
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration
    let config = config::load(args.config)?;

    // Override config with CLI flags
    let bind = args.bind.unwrap_or_else(|| config.bind.clone());
    let port = args.port.unwrap_or(config.port);

    if !args.folder.exists() {
        anyhow::bail!("Folder not found: {}", args.folder.display());
    }
    if !args.folder.is_dir() {
        anyhow::bail!("Not a folder: {}", args.folder.display());
    }

    // Canonical root so served paths resolve consistently
    let root = args
        .folder
        .canonicalize()
        .with_context(|| format!("Failed to resolve folder {}", args.folder.display()))?;

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", bind, port))?;
    let local = listener.local_addr()?;
    println!("imgrid serving {} on http://{}", root.display(), local);
    log_debug(&format!("serving {} on http://{}", root.display(), local));

    let state = Arc::new(AppState::new(root, config));
    server::serve(listener, state).await
}
