//! Server Initialization
//!
//! Loads configuration, installs logging, connects the session store and
//! serves the router until Ctrl-C.

use crate::routes::router;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tollgate_infrastructure::AuthService;
use tollgate_infrastructure::config::ConfigLoader;
use tollgate_infrastructure::kv::create_kv_store;
use tollgate_infrastructure::logging::{init_logging, log_config_loaded};
use tracing::info;

/// Run the Tollgate server
///
/// Any configuration or startup failure is returned before the listener
/// opens, so the binary exits non-zero without serving a request.
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;
    match loader.config_source() {
        Some(path) => log_config_loaded(&path, path.exists()),
        None => info!("No configuration file found, using defaults and environment"),
    }

    let store = create_kv_store(&config.kv).await?;
    let auth = Arc::new(AuthService::from_config(&config.auth, store)?);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(
        address = %address,
        provider = auth.sessions().provider_name(),
        algorithm = ?auth.tokens().algorithm(),
        "Tollgate listening"
    );

    axum::serve(listener, router(auth))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Tollgate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler; serve until the process is killed
        std::future::pending::<()>().await;
    }
}
