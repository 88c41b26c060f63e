use k_resolver_domain::Config;
use k_resolver_infrastructure::asn::BgpViewAsnLookup;
use k_resolver_infrastructure::dns::HickoryDnsResolver;
use std::sync::Arc;
use tracing::info;

/// Outbound adapters: the DNS resolver and the ASN lookup client.
pub struct Adapters {
    pub resolver: Arc<HickoryDnsResolver>,
    pub asn_lookup: Arc<BgpViewAsnLookup>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = HickoryDnsResolver::new(&config.dns);
        let asn_lookup = BgpViewAsnLookup::new(&config.asn_lookup)?;

        info!(
            query_timeout_ms = config.dns.query_timeout_ms,
            asn_base_url = %config.asn_lookup.base_url,
            asn_api_key = config.asn_lookup.api_key.is_some(),
            "Outbound adapters ready"
        );

        Ok(Self {
            resolver: Arc::new(resolver),
            asn_lookup: Arc::new(asn_lookup),
        })
    }
}
