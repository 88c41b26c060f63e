use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Used when no nameserver can be read from the system configuration.
    #[serde(default = "default_fallback_server")]
    pub fallback_server: String,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            fallback_server: default_fallback_server(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_fallback_server() -> String {
    "8.8.8.8:53".to_string()
}
