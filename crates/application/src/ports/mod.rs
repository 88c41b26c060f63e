mod asn_lookup;
mod dns_resolver;
mod dns_server_repository;
mod health_probe;
mod isp_repository;
mod query_log_repository;

pub use asn_lookup::AsnLookup;
pub use dns_resolver::DnsResolver;
pub use dns_server_repository::DnsServerRepository;
pub use health_probe::HealthProbe;
pub use isp_repository::{IspRepository, SeedSummary};
pub use query_log_repository::QueryLogRepository;

// Re-export for convenience
pub use k_resolver_domain::DnsLookup;
