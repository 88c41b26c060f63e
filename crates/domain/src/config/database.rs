use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// sqlx SQLite connection string, e.g. `sqlite:k-resolver.db`.
    #[serde(default = "default_db_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Load the built-in ISP directory at startup when the store is empty.
    #[serde(default = "default_true")]
    pub seed_on_startup: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            max_connections: default_max_connections(),
            seed_on_startup: true,
        }
    }
}

fn default_db_url() -> String {
    "sqlite:k-resolver.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}
