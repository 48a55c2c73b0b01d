//! Audit log viewer binary.
//!
//! Loads a newline-delimited JSON audit log into memory once, then
//! serves the listing and search pages over HTTP.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use audit_store::load_shared;
use audit_web::{ViewerConfig, ViewerServer};

/// Web viewer for newline-delimited JSON audit logs.
#[derive(Parser, Debug)]
#[command(name = "auditview")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the audit log file (one JSON object per line).
    #[arg(short, long, env = "AUDITVIEW_LOGFILE")]
    logfile: PathBuf,

    /// Port to listen on.
    #[arg(short, long, env = "AUDITVIEW_PORT", default_value_t = 8080)]
    port: u16,

    /// Address to bind to.
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // One-shot load; any I/O or parse failure is fatal to startup.
    let store = match load_shared(&cli.logfile) {
        Ok(store) => store,
        Err(e) => {
            error!(logfile = %cli.logfile.display(), "Failed to load audit log: {e}");
            std::process::exit(1);
        }
    };

    info!(
        logfile = %cli.logfile.display(),
        records = store.len(),
        "Audit log loaded"
    );

    let bind_addr = SocketAddr::new(cli.bind, cli.port);
    let config = ViewerConfig::new(bind_addr);

    let server = ViewerServer::new(config, store);

    if let Err(e) = server.serve(bind_addr).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
