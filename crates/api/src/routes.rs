use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/isps", get(handlers::list_isps))
        .route("/isps/{id}", get(handlers::get_isp))
        .route("/dns", get(handlers::list_dns_servers))
        .route("/resolve", post(handlers::resolve_domain))
        .route("/resolve/examples", get(handlers::get_command_examples))
        .route("/detect-isp", post(handlers::detect_isp))
        .with_state(state)
}

/// Full application router: landing page, health check and `/api`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_check))
        .with_state(state.clone())
        .nest("/api", create_api_routes(state))
}
