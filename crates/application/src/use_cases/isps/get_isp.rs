use crate::ports::IspRepository;
use k_resolver_domain::{DomainError, Isp};
use std::sync::Arc;

pub struct GetIspUseCase {
    repository: Arc<dyn IspRepository>,
}

impl GetIspUseCase {
    pub fn new(repository: Arc<dyn IspRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i64) -> Result<Isp, DomainError> {
        self.repository
            .get_with_servers(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("ISP {} not found", id)))
    }
}
