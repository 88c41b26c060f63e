use crate::ports::HealthProbe;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub database_connected: bool,
}

impl HealthReport {
    pub fn status(&self) -> &'static str {
        if self.database_connected {
            "healthy"
        } else {
            "degraded"
        }
    }

    pub fn database(&self) -> &'static str {
        if self.database_connected {
            "connected"
        } else {
            "disconnected"
        }
    }
}

pub struct CheckHealthUseCase {
    probe: Arc<dyn HealthProbe>,
}

impl CheckHealthUseCase {
    pub fn new(probe: Arc<dyn HealthProbe>) -> Self {
        Self { probe }
    }

    /// Never fails: an unreachable store is reported, not raised.
    pub async fn execute(&self) -> HealthReport {
        let database_connected = match self.probe.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database health probe failed");
                false
            }
        };
        HealthReport { database_connected }
    }
}
