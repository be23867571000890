pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use shared::state::AppState;
use shared::upstream::HttpUpstream;
use system::middleware::request_logger::request_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let upstream = HttpUpstream::new(&config.upstream)?;
    tracing::info!("Relaying /api/* to {}", upstream.base_url());

    let state = AppState::new(Arc::new(upstream));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let static_dir = config.static_dir();
    tracing::info!("Serving frontend from {}", static_dir.display());

    let app = routes::configure_routes(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = config.listen_addr()?;
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
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
