use async_trait::async_trait;
use k_resolver_domain::AsnInfo;

#[async_trait]
pub trait AsnLookup: Send + Sync {
    /// `None` covers "unknown address" as well as timeouts and service failures.
    async fn lookup(&self, ip: &str) -> Option<AsnInfo>;
}
