use crate::ports::QueryLogRepository;
use k_resolver_domain::{DomainError, QueryLog};
use std::sync::Arc;

pub struct LogQueryUseCase {
    repository: Arc<dyn QueryLogRepository>,
}

impl LogQueryUseCase {
    pub fn new(repository: Arc<dyn QueryLogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: &QueryLog) -> Result<(), DomainError> {
        self.repository.log_query(query).await
    }
}
