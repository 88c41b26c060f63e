use async_trait::async_trait;
use k_resolver_domain::{DnsServer, DomainError};

#[async_trait]
pub trait DnsServerRepository: Send + Sync {
    /// Active servers across all ISPs, ascending priority.
    async fn get_active(&self) -> Result<Vec<DnsServer>, DomainError>;

    /// Active servers of one ISP, ascending priority.
    async fn get_active_by_isp(&self, isp_id: i64) -> Result<Vec<DnsServer>, DomainError>;
}
