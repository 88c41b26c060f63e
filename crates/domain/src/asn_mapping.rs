use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Links an autonomous system number to the ISP that announces it.
///
/// `asn` is not unique: one ISP may hold several ASNs and seed data may map
/// one ASN to more than one ISP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsnMapping {
    pub id: i64,
    pub isp_id: i64,
    pub asn: i64,
    pub as_name: Option<Arc<str>>,
    pub created_at: String,
}

/// What an external IP intelligence service reports for an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnInfo {
    pub asn: i64,
    pub as_name: Option<String>,
}
