use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use tracing::debug;

use crate::{
    dto::{IspQuery, IspResponse},
    errors::ApiError,
    state::AppState,
};

pub async fn list_isps(
    State(state): State<AppState>,
    Query(params): Query<IspQuery>,
) -> Result<Json<Vec<IspResponse>>, ApiError> {
    let isps = state
        .directory
        .list_isps
        .execute(params.include_inactive)
        .await?;
    debug!(count = isps.len(), "ISPs retrieved successfully");

    Ok(Json(isps.into_iter().map(IspResponse::from_isp).collect()))
}

pub async fn get_isp(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<IspResponse>, ApiError> {
    let isp = state.directory.get_isp.execute(id).await?;
    Ok(Json(IspResponse::from_isp(isp)))
}
