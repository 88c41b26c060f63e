use serde::{Deserialize, Serialize};

/// A shell command a user can paste to repeat a lookup themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandExample {
    pub platform: String,
    pub command: String,
    pub description: String,
}

impl CommandExample {
    fn new(platform: &str, command: String, description: &str) -> Self {
        Self {
            platform: platform.to_string(),
            command,
            description: description.to_string(),
        }
    }
}

/// Fixed set of nslookup/dig invocations, in display order.
pub fn command_examples(domain: &str, dns_server: &str) -> Vec<CommandExample> {
    vec![
        CommandExample::new(
            "windows",
            format!("nslookup {} {}", domain, dns_server),
            "Windows에서 nslookup 사용",
        ),
        CommandExample::new(
            "macos",
            format!("dig @{} {}", dns_server, domain),
            "macOS에서 dig 사용",
        ),
        CommandExample::new(
            "linux",
            format!("dig @{} {}", dns_server, domain),
            "Linux에서 dig 사용",
        ),
        CommandExample::new(
            "linux",
            format!("nslookup {} {}", domain, dns_server),
            "Linux에서 nslookup 사용 (대안)",
        ),
    ]
}
