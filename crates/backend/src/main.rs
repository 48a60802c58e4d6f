pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use shared::config;
use shared::directory::api_client::ApiClient;
use shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let static_dir = config::get_static_dir(&config);
    tracing::info!("Catalog API: {}", config.api.base_url);
    tracing::info!("Static files: {}", static_dir.display());

    let state = AppState {
        directory: Arc::new(ApiClient::new(&config.api)?),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state, &static_dir)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
