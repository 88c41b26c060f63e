//! IP → ASN lookup against the BGPView REST API.
//!
//! `GET {base_url}/ip/{ip}`; the ASN of the first listed prefix wins.

use async_trait::async_trait;
use k_resolver_application::ports::AsnLookup;
use k_resolver_domain::config::AsnLookupConfig;
use k_resolver_domain::{AsnInfo, DomainError};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Debug, Deserialize)]
struct IpResponse {
    #[serde(default)]
    data: Option<IpData>,
}

#[derive(Debug, Deserialize)]
struct IpData {
    #[serde(default)]
    prefixes: Vec<Prefix>,
}

#[derive(Debug, Deserialize)]
struct Prefix {
    #[serde(default)]
    asn: Option<PrefixAsn>,
}

#[derive(Debug, Deserialize)]
struct PrefixAsn {
    asn: Option<i64>,
    name: Option<String>,
}

impl IpResponse {
    fn into_asn_info(self) -> Option<AsnInfo> {
        let prefix_asn = self.data?.prefixes.into_iter().next()?.asn?;
        Some(AsnInfo {
            asn: prefix_asn.asn?,
            as_name: prefix_asn.name,
        })
    }
}

pub struct BgpViewAsnLookup {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl BgpViewAsnLookup {
    pub fn new(config: &AsnLookupConfig) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("k-resolver/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn fetch(&self, ip: &str) -> Result<Option<AsnInfo>, reqwest::Error> {
        let mut request = self
            .http_client
            .get(format!("{}/ip/{}", self.base_url, ip))
            .header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header(AUTHORIZATION, format!("Bearer {}", key));
        }

        let response = request.send().await?.error_for_status()?;
        let body: IpResponse = response.json().await?;
        Ok(body.into_asn_info())
    }
}

#[async_trait]
impl AsnLookup for BgpViewAsnLookup {
    #[instrument(skip(self))]
    async fn lookup(&self, ip: &str) -> Option<AsnInfo> {
        match self.fetch(ip).await {
            Ok(info) => {
                debug!(asn = info.as_ref().map(|i| i.asn), "ASN lookup finished");
                info
            }
            Err(e) => {
                warn!(error = %e, "ASN lookup failed");
                None
            }
        }
    }
}
