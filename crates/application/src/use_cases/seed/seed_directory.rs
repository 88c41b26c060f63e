use crate::ports::{IspRepository, SeedSummary};
use k_resolver_domain::directory::{builtin_directory, SeedIsp};
use k_resolver_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(SeedSummary),
    /// The store already had ISPs; nothing was written.
    Skipped { existing_isps: u64 },
}

pub struct SeedDirectoryUseCase {
    repository: Arc<dyn IspRepository>,
    entries: Vec<SeedIsp>,
}

impl SeedDirectoryUseCase {
    pub fn new(repository: Arc<dyn IspRepository>) -> Self {
        Self::with_entries(repository, builtin_directory())
    }

    pub fn with_entries(repository: Arc<dyn IspRepository>, entries: Vec<SeedIsp>) -> Self {
        Self {
            repository,
            entries,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<SeedOutcome, DomainError> {
        let existing_isps = self.repository.count().await?;
        if existing_isps > 0 {
            warn!(existing_isps, "Directory data already exists, skipping seed");
            return Ok(SeedOutcome::Skipped { existing_isps });
        }

        let summary = self.repository.insert_directory(&self.entries).await?;
        info!(
            isps = summary.isps,
            dns_servers = summary.dns_servers,
            asn_mappings = summary.asn_mappings,
            "Directory seeded"
        );
        Ok(SeedOutcome::Seeded(summary))
    }
}
