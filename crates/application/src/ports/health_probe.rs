use async_trait::async_trait;
use k_resolver_domain::DomainError;

#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;
}
