pub mod detection;
pub mod dns_server;
pub mod health;
pub mod isp;
pub mod resolve;

pub use detection::{DetectIspRequest, DetectIspResponse};
pub use dns_server::{DnsServerQuery, DnsServerResponse};
pub use health::HealthResponse;
pub use isp::{IspQuery, IspResponse};
pub use resolve::{CommandExampleQuery, CommandExampleResponse, ResolveRequest, ResolveResponse};
