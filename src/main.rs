//! Prediction API server.
//!
//! Loads the training artifacts once at startup and serves the library's
//! router over them. A missing or corrupt artifact pair is fatal: the server
//! refuses to start rather than guess.

use std::sync::Arc;

use housing_ml::{serve, ModelArtifacts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let artifacts_dir =
        std::env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "artifacts".to_string());
    let artifacts = ModelArtifacts::load(&artifacts_dir).map_err(|e| {
        tracing::error!(dir = %artifacts_dir, error = %e, "Cannot serve without artifacts");
        anyhow::anyhow!(e)
    })?;

    let app = serve::router(Arc::new(artifacts));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 8000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://0.0.0.0:8000");
    axum::serve(listener, app).await?;
    Ok(())
}
