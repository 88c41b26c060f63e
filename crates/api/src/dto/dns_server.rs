use k_resolver_domain::DnsServer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsServerResponse {
    pub id: i64,
    pub isp_id: i64,
    pub ip_address: String,
    pub priority: i64,
    pub region: Option<String>,
    pub server_type: String,
    pub doh_url: Option<String>,
    pub dot_hostname: Option<String>,
    pub is_anycast: bool,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl DnsServerResponse {
    pub fn from_server(s: DnsServer) -> Self {
        Self {
            id: s.id,
            isp_id: s.isp_id,
            ip_address: s.ip_address.to_string(),
            priority: s.priority,
            region: s.region.as_ref().map(|r| r.to_string()),
            server_type: s.server_type.to_str().to_string(),
            doh_url: s.doh_url.as_ref().map(|u| u.to_string()),
            dot_hostname: s.dot_hostname.as_ref().map(|h| h.to_string()),
            is_anycast: s.is_anycast,
            is_active: s.is_active,
            notes: s.notes.as_ref().map(|n| n.to_string()),
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnsServerQuery {
    pub isp_id: Option<i64>,
}
