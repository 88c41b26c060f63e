use axum::http::HeaderValue;
use k_resolver_api::{create_app, AppState};
use k_resolver_domain::config::{CorsConfig, ServerConfig};
use std::net::{IpAddr, SocketAddr};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Listening address from the server config; IPv6 literals are accepted unbracketed.
pub fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let ip = server
        .bind_address
        .trim()
        .parse::<IpAddr>()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", server.bind_address, e))?;
    Ok(SocketAddr::new(ip, server.port))
}

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    cors: &CorsConfig,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        landing_url = format!("http://{}", bind_addr),
        api_url = format!("http://{}/api", bind_addr),
        cors_origins = ?cors.allowed_origins,
        "Starting web server"
    );

    let app = create_app(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
