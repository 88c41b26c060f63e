//! K-Resolver Domain Layer
pub mod asn_mapping;
pub mod command_example;
pub mod config;
pub mod directory;
pub mod detection;
pub mod dns_record;
pub mod dns_server;
pub mod errors;
pub mod isp;
pub mod query_log;
pub mod resolution;

pub use asn_mapping::{AsnInfo, AsnMapping};
pub use command_example::{command_examples, CommandExample};
pub use config::{CliOverrides, Config};
pub use detection::IspDetection;
pub use dns_record::RecordType;
pub use dns_server::{DnsServer, ServerType};
pub use errors::DomainError;
pub use isp::{Isp, IspType};
pub use query_log::QueryLog;
pub use resolution::{DnsLookup, ResolveFailure, ResolveOutcome, SYSTEM_DEFAULT_SERVER};
