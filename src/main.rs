//! Volcano admission webhook - defaults Volcano batch jobs on creation

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use volcano_admission::config::{Defaults, ServerConfig, DEFAULT_LISTEN_ADDR};
use volcano_admission::telemetry::init_tracing;
use volcano_admission::webhook::server::start_server;
use volcano_admission::webhook::WebhookState;

/// Mutating admission webhook for Volcano batch jobs
#[derive(Parser, Debug)]
#[command(name = "volcano-admission", version, about, long_about = None)]
struct Cli {
    /// Address the HTTPS server listens on
    #[arg(long, env = "VC_WEBHOOK_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    listen_addr: SocketAddr,

    /// PEM certificate chain served to the API server
    #[arg(long, env = "VC_WEBHOOK_TLS_CERT_FILE")]
    tls_cert_file: PathBuf,

    /// PEM private key for the serving certificate
    #[arg(long, env = "VC_WEBHOOK_TLS_KEY_FILE")]
    tls_key_file: PathBuf,

    /// Queue assigned to jobs submitted without one
    #[arg(long, env = "VC_DEFAULT_QUEUE", default_value = volcano_batch::DEFAULT_QUEUE)]
    default_queue: String,

    /// Prefix for generated task names; the task index is appended
    #[arg(long, env = "VC_TASK_NAME_PREFIX", default_value = volcano_batch::DEFAULT_TASK_SPEC)]
    task_name_prefix: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // rustls needs a process-wide crypto provider before any TLS config is built
    if let Err(e) = rustls::crypto::aws_lc_rs::default_provider().install_default() {
        eprintln!("CRITICAL: Failed to install crypto provider: {:?}", e);
        std::process::exit(1);
    }

    init_tracing()?;

    let cli = Cli::parse();

    let defaults = Defaults::new(cli.default_queue, cli.task_name_prefix)?;
    tracing::info!(
        default_queue = defaults.queue(),
        task_name_prefix = defaults.task_name_prefix(),
        "Loaded job defaults"
    );

    let state = Arc::new(WebhookState::new(&defaults));
    let config = ServerConfig {
        addr: cli.listen_addr,
        cert_file: cli.tls_cert_file,
        key_file: cli.tls_key_file,
    };

    start_server(config, state).await?;
    Ok(())
}
