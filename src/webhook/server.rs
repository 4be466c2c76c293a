//! HTTPS server for the admission webhook

use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use tracing::info;

use super::{webhook_router, WebhookState};
use crate::config::ServerConfig;
use crate::{Error, Result};

/// Serve the webhook over TLS until the server stops
///
/// The API server only calls webhooks over HTTPS, so there is no plaintext
/// mode.
pub async fn start_server(config: ServerConfig, state: Arc<WebhookState>) -> Result<()> {
    let tls_config = RustlsConfig::from_pem_file(&config.cert_file, &config.key_file)
        .await
        .map_err(|e| {
            Error::config(format!(
                "TLS config error (cert {}, key {}): {}",
                config.cert_file.display(),
                config.key_file.display(),
                e
            ))
        })?;

    let app = webhook_router(state);

    info!(addr = %config.addr, "Starting admission webhook server");

    axum_server::bind_rustls(config.addr, tls_config)
        .serve(app.into_make_service())
        .await
        .map_err(|e| Error::server(format!("webhook server error: {}", e)))?;

    Ok(())
}
