use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::network::SubwayNetwork;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let network = SubwayNetwork::new(config.graph_cache_capacity);
    let app = create_router(AppState::new(network));

    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Subway server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET    /health                          - Health check");
    info!("  POST   /stations, GET /stations         - Register / list stations");
    info!("  DELETE /stations/:id                    - Remove an unused station");
    info!("  POST   /lines, GET /lines               - Open / list lines");
    info!("  GET|PUT|DELETE /lines/:id               - Show / update / close a line");
    info!("  POST   /lines/:id/sections              - Add a section");
    info!("  DELETE /lines/:id/sections?station_id=  - Remove a station from a line");
    info!("  GET    /paths?source=&target=           - Shortest path");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for shutdown signal: {e}");
        }
        info!("shutting down");
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
