use crate::dns_server::DnsServer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IspType {
    #[default]
    Landline,
    Mobile,
    Both,
}

impl IspType {
    pub fn to_str(&self) -> &'static str {
        match self {
            IspType::Landline => "landline",
            IspType::Mobile => "mobile",
            IspType::Both => "both",
        }
    }
}

impl fmt::Display for IspType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for IspType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landline" => Ok(IspType::Landline),
            "mobile" => Ok(IspType::Mobile),
            "both" => Ok(IspType::Both),
            _ => Err(format!("Unknown ISP type: {}", s)),
        }
    }
}

/// A carrier together with the DNS servers it operates.
///
/// The ISP owns its servers; a `DnsServer` only knows its `isp_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Isp {
    pub id: i64,
    pub name: Arc<str>,
    pub name_en: Option<Arc<str>>,
    pub country: Arc<str>,
    pub isp_type: IspType,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub dns_servers: Vec<DnsServer>,
}

impl Isp {
    pub const DEFAULT_COUNTRY: &'static str = "KR";

    pub fn with_dns_servers(mut self, dns_servers: Vec<DnsServer>) -> Self {
        self.dns_servers = dns_servers;
        self
    }
}
