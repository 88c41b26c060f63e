use crate::ports::IspRepository;
use k_resolver_domain::{DomainError, Isp};
use std::sync::Arc;
use tracing::debug;

pub struct ListIspsUseCase {
    repository: Arc<dyn IspRepository>,
}

impl ListIspsUseCase {
    pub fn new(repository: Arc<dyn IspRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, include_inactive: bool) -> Result<Vec<Isp>, DomainError> {
        let isps = self.repository.get_all_with_servers().await?;
        let total = isps.len();

        let isps: Vec<Isp> = if include_inactive {
            isps
        } else {
            isps.into_iter().filter(|isp| isp.is_active).collect()
        };

        debug!(total, returned = isps.len(), include_inactive, "ISPs listed");
        Ok(isps)
    }
}
