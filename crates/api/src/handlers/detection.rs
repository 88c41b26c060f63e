use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use k_resolver_domain::DomainError;
use std::net::IpAddr;

use super::bad_body;
use crate::{
    dto::{DetectIspRequest, DetectIspResponse},
    errors::ApiError,
    extract::ClientAddr,
    state::AppState,
};

pub async fn detect_isp(
    State(state): State<AppState>,
    ClientAddr(client_ip): ClientAddr,
    body: Result<Json<DetectIspRequest>, JsonRejection>,
) -> Result<Json<DetectIspResponse>, ApiError> {
    let Json(req) = body.map_err(bad_body)?;

    let requested = req
        .ip_address
        .as_deref()
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    let ip_address = match (requested, client_ip) {
        (Some(ip), _) => {
            ip.parse::<IpAddr>()
                .map_err(|_| ApiError(DomainError::InvalidIpAddress(ip.to_string())))?;
            ip.to_string()
        }
        (None, Some(peer)) => peer.to_string(),
        (None, None) => {
            return Err(ApiError(DomainError::InvalidInput(
                "IP address is required".to_string(),
            )))
        }
    };

    let response = match state.directory.detect_isp.execute(&ip_address).await? {
        Some(detection) => DetectIspResponse::from_detection(detection),
        None => DetectIspResponse::undetected(ip_address),
    };

    Ok(Json(response))
}
