use super::dns_server::DnsServerResponse;
use k_resolver_domain::Isp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IspResponse {
    pub id: i64,
    pub name: String,
    pub name_en: Option<String>,
    pub country: String,
    pub isp_type: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub dns_servers: Vec<DnsServerResponse>,
}

impl IspResponse {
    pub fn from_isp(isp: Isp) -> Self {
        Self {
            id: isp.id,
            name: isp.name.to_string(),
            name_en: isp.name_en.as_ref().map(|n| n.to_string()),
            country: isp.country.to_string(),
            isp_type: isp.isp_type.to_str().to_string(),
            is_active: isp.is_active,
            created_at: isp.created_at,
            updated_at: isp.updated_at,
            dns_servers: isp
                .dns_servers
                .into_iter()
                .map(DnsServerResponse::from_server)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IspQuery {
    #[serde(default)]
    pub include_inactive: bool,
}
