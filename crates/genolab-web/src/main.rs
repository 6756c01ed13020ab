//! GenoLab Web Server
//!
//! Run with: cargo run -p genolab-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use genolab_common::lab_config::LabConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("genolab=info,tower_http=info")),
        )
        .init();

    info!("Starting GenoLab Web Server...");

    // A missing genolab.toml already falls back to defaults inside `load`.
    let config = LabConfig::load(None)?;

    let addr = config.server.bind_address();
    let state = genolab_web::state::AppState::new(config)?;
    let app = genolab_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
