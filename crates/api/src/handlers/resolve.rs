use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Json,
};
use k_resolver_domain::{command_examples, QueryLog};
use tracing::info;

use super::bad_body;
use crate::{
    dto::{CommandExampleQuery, CommandExampleResponse, ResolveRequest, ResolveResponse},
    errors::ApiError,
    extract::ClientAddr,
    state::AppState,
};

/// Resolution failures, a blank domain included, come back as `success: false`
/// and are logged; only a malformed body or a failed log write produce an error status.
pub async fn resolve_domain(
    State(state): State<AppState>,
    ClientAddr(client_ip): ClientAddr,
    body: Result<Json<ResolveRequest>, JsonRejection>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let Json(req) = body.map_err(bad_body)?;

    let outcome = state
        .queries
        .resolve
        .execute(req.domain.trim(), req.dns_server.as_deref(), &req.record_type)
        .await;

    state
        .queries
        .log_query
        .execute(&QueryLog::from_outcome(&outcome, client_ip))
        .await?;

    info!(
        domain = %outcome.domain,
        dns_server = %outcome.dns_server,
        success = outcome.is_success(),
        response_time_ms = outcome.response_time_ms,
        "Resolve request served"
    );

    Ok(Json(ResolveResponse::from_outcome(outcome)))
}

pub async fn get_command_examples(
    Query(params): Query<CommandExampleQuery>,
) -> Json<Vec<CommandExampleResponse>> {
    Json(
        command_examples(&params.domain, &params.dns_server)
            .into_iter()
            .map(CommandExampleResponse::from)
            .collect(),
    )
}
