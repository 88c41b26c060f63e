use super::isp::IspResponse;
use k_resolver_domain::IspDetection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectIspRequest {
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectIspResponse {
    pub ip_address: String,
    pub asn: Option<i64>,
    pub as_name: Option<String>,
    pub isp: Option<IspResponse>,
    pub detected: bool,
}

impl DetectIspResponse {
    pub fn from_detection(detection: IspDetection) -> Self {
        let detected = detection.detected();
        Self {
            ip_address: detection.ip_address,
            asn: Some(detection.asn),
            as_name: detection.as_name,
            isp: detection.isp.map(IspResponse::from_isp),
            detected,
        }
    }

    /// No ASN information was available for `ip_address`.
    pub fn undetected(ip_address: String) -> Self {
        Self {
            ip_address,
            asn: None,
            as_name: None,
            isp: None,
            detected: false,
        }
    }
}
