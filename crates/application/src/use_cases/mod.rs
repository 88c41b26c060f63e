pub mod detection;
pub mod dns_servers;
pub mod health;
pub mod isps;
pub mod queries;
pub mod resolve;
pub mod seed;

// Re-export use cases
pub use detection::DetectIspUseCase;
pub use dns_servers::ListDnsServersUseCase;
pub use health::{CheckHealthUseCase, HealthReport};
pub use isps::{GetIspUseCase, ListIspsUseCase};
pub use queries::LogQueryUseCase;
pub use resolve::ResolveDomainUseCase;
pub use seed::{SeedDirectoryUseCase, SeedOutcome};
