pub mod detection;
pub mod dns_servers;
pub mod health;
pub mod isps;
pub mod landing;
pub mod resolve;

pub use detection::detect_isp;
pub use dns_servers::list_dns_servers;
pub use health::health_check;
pub use isps::{get_isp, list_isps};
pub use landing::index_handler;
pub use resolve::{get_command_examples, resolve_domain};

use crate::errors::ApiError;
use axum::extract::rejection::JsonRejection;
use k_resolver_domain::DomainError;

pub(crate) fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError(DomainError::InvalidInput(rejection.body_text()))
}
