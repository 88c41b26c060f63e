use crate::dns_record::RecordType;
use crate::errors::DomainError;
use std::fmt;

/// Reported in place of a server address when the system resolver was used.
pub const SYSTEM_DEFAULT_SERVER: &str = "system_default";

/// A single question for the DNS Resolution Adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsLookup {
    pub domain: String,
    pub record_type: RecordType,
    /// `None` asks the system's configured nameserver.
    pub server: Option<String>,
}

impl DnsLookup {
    pub fn new(domain: impl Into<String>, record_type: RecordType, server: Option<String>) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            server,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    /// The resolver ran and reported a DNS-level problem (NXDOMAIN, timeout, ...).
    Dns(String),
    /// Anything that is not a DNS answer or a DNS error.
    Unexpected(String),
}

impl ResolveFailure {
    pub fn from_error(err: &DomainError) -> Self {
        match err {
            DomainError::NxDomain(_)
            | DomainError::NoAnswer { .. }
            | DomainError::QueryTimeout(_)
            | DomainError::DnsServerError { .. }
            | DomainError::TransportError { .. }
            | DomainError::InvalidDomainName(_)
            | DomainError::InvalidIpAddress(_)
            | DomainError::UnsupportedRecordType(_) => ResolveFailure::Dns(err.to_string()),
            _ => ResolveFailure::Unexpected(err.to_string()),
        }
    }
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveFailure::Dns(msg) => f.write_str(msg),
            ResolveFailure::Unexpected(msg) => write!(f, "Unexpected error: {}", msg),
        }
    }
}

/// Result of one resolve request. Failures are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub domain: String,
    pub dns_server: String,
    pub record_type: String,
    pub response_time_ms: u64,
    pub result: Result<Vec<String>, ResolveFailure>,
}

impl ResolveOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn answers(&self) -> &[String] {
        match &self.result {
            Ok(answers) => answers,
            Err(_) => &[],
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.result.as_ref().err().map(|e| e.to_string())
    }
}
