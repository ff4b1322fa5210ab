use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::network::Network;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subway_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let network = if config.seed {
        match Network::seeded() {
            Ok(network) => network,
            Err(e) => {
                error!("failed to load seed network: {e}");
                std::process::exit(2);
            }
        }
    } else {
        Network::new()
    };

    let state = AppState::new(network);
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Subway map listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET    /health");
    info!("  GET    /stations, POST /stations");
    info!("  GET    /lines, POST /lines");
    info!("  GET    /lines/:name, DELETE /lines/:name");
    info!("  POST   /lines/:name/sections");
    info!("  DELETE /lines/:name/sections/:station");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
