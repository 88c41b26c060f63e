use k_resolver_domain::{CommandExample, ResolveOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveRequest {
    pub domain: String,
    pub dns_server: Option<String>,
    #[serde(default = "default_record_type")]
    pub record_type: String,
}

fn default_record_type() -> String {
    "A".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub domain: String,
    pub dns_server: String,
    pub record_type: String,
    pub answers: Vec<String>,
    pub response_time_ms: u64,
    pub success: bool,
    pub error_message: Option<String>,
}

impl ResolveResponse {
    pub fn from_outcome(outcome: ResolveOutcome) -> Self {
        let error_message = outcome.error_message();
        let success = outcome.is_success();
        Self {
            domain: outcome.domain,
            dns_server: outcome.dns_server,
            record_type: outcome.record_type,
            answers: outcome.result.unwrap_or_default(),
            response_time_ms: outcome.response_time_ms,
            success,
            error_message,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandExampleQuery {
    #[serde(default = "default_example_domain")]
    pub domain: String,
    #[serde(default = "default_example_server")]
    pub dns_server: String,
}

fn default_example_domain() -> String {
    "google.com".to_string()
}

fn default_example_server() -> String {
    "8.8.8.8".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandExampleResponse {
    pub platform: String,
    pub command: String,
    pub description: String,
}

impl From<CommandExample> for CommandExampleResponse {
    fn from(example: CommandExample) -> Self {
        Self {
            platform: example.platform,
            command: example.command,
            description: example.description,
        }
    }
}
