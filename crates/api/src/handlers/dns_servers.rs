use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::{
    dto::{DnsServerQuery, DnsServerResponse},
    errors::ApiError,
    state::AppState,
};

pub async fn list_dns_servers(
    State(state): State<AppState>,
    Query(params): Query<DnsServerQuery>,
) -> Result<Json<Vec<DnsServerResponse>>, ApiError> {
    let servers = state
        .directory
        .list_dns_servers
        .execute(params.isp_id)
        .await?;

    Ok(Json(
        servers
            .into_iter()
            .map(DnsServerResponse::from_server)
            .collect(),
    ))
}
