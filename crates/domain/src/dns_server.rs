use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    #[default]
    Standard,
    Doh,
    Dot,
}

impl ServerType {
    pub fn to_str(&self) -> &'static str {
        match self {
            ServerType::Standard => "standard",
            ServerType::Doh => "doh",
            ServerType::Dot => "dot",
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ServerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ServerType::Standard),
            "doh" => Ok(ServerType::Doh),
            "dot" => Ok(ServerType::Dot),
            _ => Err(format!("Unknown server type: {}", s)),
        }
    }
}

/// A resolver endpoint operated by one ISP.
///
/// `priority` 1 is the primary server; higher numbers are less preferred.
/// The same `ip_address` may appear under several ISPs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsServer {
    pub id: i64,
    pub isp_id: i64,
    pub ip_address: Arc<str>,
    pub priority: i64,
    pub region: Option<Arc<str>>,
    pub server_type: ServerType,
    pub doh_url: Option<Arc<str>>,
    pub dot_hostname: Option<Arc<str>>,
    pub is_anycast: bool,
    pub is_active: bool,
    pub notes: Option<Arc<str>>,
    pub created_at: String,
    pub updated_at: String,
}
