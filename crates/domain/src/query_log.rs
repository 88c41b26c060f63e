use std::net::IpAddr;

/// One resolution request as recorded in `query_logs`.
///
/// Rows are append-only; the service never reads them back.
#[derive(Debug, Clone)]
pub struct QueryLog {
    pub id: Option<i64>,
    pub client_ip: Option<IpAddr>,
    pub domain: String,
    pub dns_server: String,
    pub response_time_ms: Option<u64>,
    pub success: bool,
    pub error_message: Option<String>,
    pub created_at: Option<String>,
}

impl QueryLog {
    pub fn from_outcome(outcome: &crate::ResolveOutcome, client_ip: Option<IpAddr>) -> Self {
        Self {
            id: None,
            client_ip,
            domain: outcome.domain.clone(),
            dns_server: outcome.dns_server.clone(),
            response_time_ms: Some(outcome.response_time_ms),
            success: outcome.is_success(),
            error_message: outcome.error_message(),
            created_at: None,
        }
    }
}
