use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use convert_api::config::AppConfig;
use convert_api::{router, AppState};
use convert_core::StorageClient;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.auth_key.is_none() {
        tracing::warn!("AUTH_KEY not set in environment; every request will be rejected");
    }

    let port = config.port;
    let state = AppState::new(config, StorageClient::from_env());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(port = port, "image converter listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    // ctrl-c を受けたら新規受付を止めて終了する
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
}
