use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use group_api_server::config::Settings;
use group_api_server::services::GraphClient;
use group_api_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,group_api_server=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting group API server...");

    // Load configuration; missing credentials fail here, not mid-request.
    let settings = Settings::load()?;
    info!("Configuration loaded");

    let graph = GraphClient::new(settings.graph.clone());

    let state = AppState {
        graph,
        settings: settings.clone(),
    };

    let app = group_api_server::build_router(state);

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
