use axum::{extract::State, response::Json};

use crate::{dto::HealthResponse, state::AppState};

/// Always 200; a store outage shows up as `degraded`.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = state.health.execute().await;

    Json(HealthResponse {
        status: report.status().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: report.database().to_string(),
    })
}
