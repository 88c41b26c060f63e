use crate::ports::DnsServerRepository;
use k_resolver_domain::{DnsServer, DomainError};
use std::sync::Arc;

pub struct ListDnsServersUseCase {
    repository: Arc<dyn DnsServerRepository>,
}

impl ListDnsServersUseCase {
    pub fn new(repository: Arc<dyn DnsServerRepository>) -> Self {
        Self { repository }
    }

    /// Active servers ordered by ascending priority, optionally limited to one ISP.
    ///
    /// An `isp_id` of 0 means no filter.
    pub async fn execute(&self, isp_id: Option<i64>) -> Result<Vec<DnsServer>, DomainError> {
        match isp_id.filter(|id| *id != 0) {
            Some(id) => self.repository.get_active_by_isp(id).await,
            None => self.repository.get_active().await,
        }
    }
}
