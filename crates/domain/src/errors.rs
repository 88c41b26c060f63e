use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("The DNS operation timed out after {0} ms")]
    QueryTimeout(u64),

    #[error("The DNS query name does not exist: {0}")]
    NxDomain(String),

    #[error("The DNS response does not contain an answer to the question: {domain} IN {record_type}")]
    NoAnswer { domain: String, record_type: String },

    #[error("{rcode} from {server}")]
    DnsServerError { rcode: String, server: String },

    #[error("Transport error talking to {server}: {message}")]
    TransportError { server: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
