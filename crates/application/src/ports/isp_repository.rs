use async_trait::async_trait;
use k_resolver_domain::{directory::SeedIsp, DomainError, Isp};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub isps: usize,
    pub dns_servers: usize,
    pub asn_mappings: usize,
}

#[async_trait]
pub trait IspRepository: Send + Sync {
    /// Every ISP, active or not, each with its DNS servers loaded.
    async fn get_all_with_servers(&self) -> Result<Vec<Isp>, DomainError>;

    async fn get_with_servers(&self, id: i64) -> Result<Option<Isp>, DomainError>;

    /// First ISP (by id) mapped to `asn`, with its DNS servers loaded.
    async fn find_by_asn(&self, asn: i64) -> Result<Option<Isp>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Inserts ISPs with their servers and ASN mappings in one transaction.
    async fn insert_directory(&self, entries: &[SeedIsp]) -> Result<SeedSummary, DomainError>;
}
