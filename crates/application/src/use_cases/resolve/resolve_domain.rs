use crate::ports::DnsResolver;
use k_resolver_domain::{
    DnsLookup, DomainError, RecordType, ResolveFailure, ResolveOutcome, SYSTEM_DEFAULT_SERVER,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves `domain` once. Never fails: every error ends up in `ResolveOutcome::result`.
    ///
    /// A blank domain or an unknown record type fails without a lookup.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        dns_server: Option<&str>,
        record_type: &str,
    ) -> ResolveOutcome {
        let server = dns_server
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let reported_server = server
            .clone()
            .unwrap_or_else(|| SYSTEM_DEFAULT_SERVER.to_string());

        let start = Instant::now();
        let result = if domain.trim().is_empty() {
            Err(ResolveFailure::from_error(&DomainError::InvalidDomainName(
                "domain is empty".to_string(),
            )))
        } else {
            match record_type.parse::<RecordType>() {
                Ok(rtype) => self.run_lookup(DnsLookup::new(domain, rtype, server)).await,
                Err(e) => Err(ResolveFailure::from_error(
                    &DomainError::UnsupportedRecordType(e),
                )),
            }
        };
        let response_time_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(answers) => debug!(
                domain,
                server = %reported_server,
                answers = answers.len(),
                response_time_ms,
                "Resolution succeeded"
            ),
            Err(failure) => warn!(
                domain,
                server = %reported_server,
                error = %failure,
                response_time_ms,
                "Resolution failed"
            ),
        }

        ResolveOutcome {
            domain: domain.to_string(),
            dns_server: reported_server,
            record_type: record_type.to_string(),
            response_time_ms,
            result,
        }
    }

    async fn run_lookup(&self, lookup: DnsLookup) -> Result<Vec<String>, ResolveFailure> {
        let resolver = Arc::clone(&self.resolver);
        // A panicking adapter surfaces as a JoinError instead of unwinding the request.
        let handle = tokio::spawn(async move { resolver.resolve(&lookup).await });

        match handle.await {
            Ok(Ok(answers)) => Ok(answers),
            Ok(Err(e)) => Err(ResolveFailure::from_error(&e)),
            Err(join_err) => Err(ResolveFailure::Unexpected(join_err.to_string())),
        }
    }
}
