use crate::ports::{AsnLookup, IspRepository};
use k_resolver_domain::{DomainError, IspDetection};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub struct DetectIspUseCase {
    asn_lookup: Arc<dyn AsnLookup>,
    isp_repo: Arc<dyn IspRepository>,
}

impl DetectIspUseCase {
    pub fn new(asn_lookup: Arc<dyn AsnLookup>, isp_repo: Arc<dyn IspRepository>) -> Self {
        Self {
            asn_lookup,
            isp_repo,
        }
    }

    /// Returns `Ok(None)` when the ASN service has nothing for `ip`.
    #[instrument(skip(self))]
    pub async fn execute(&self, ip: &str) -> Result<Option<IspDetection>, DomainError> {
        let Some(asn_info) = self.asn_lookup.lookup(ip).await else {
            debug!(ip, "No ASN information available");
            return Ok(None);
        };

        let isp = self.isp_repo.find_by_asn(asn_info.asn).await?;

        info!(
            ip,
            asn = asn_info.asn,
            isp = isp.as_ref().map(|i| i.name.as_ref()),
            "ISP detection finished"
        );

        Ok(Some(IspDetection {
            ip_address: ip.to_string(),
            asn: asn_info.asn,
            as_name: asn_info.as_name,
            isp,
        }))
    }
}
