use async_trait::async_trait;
use k_resolver_domain::{DnsLookup, DomainError};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Sends one query and returns the answers rendered as text.
    async fn resolve(&self, lookup: &DnsLookup) -> Result<Vec<String>, DomainError>;
}
