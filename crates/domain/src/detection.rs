use crate::isp::Isp;

/// Outcome of mapping a client address to a carrier through its ASN.
///
/// An ASN with no mapped ISP is a normal result: `isp` is `None` and
/// `detected` is false.
#[derive(Debug, Clone)]
pub struct IspDetection {
    pub ip_address: String,
    pub asn: i64,
    pub as_name: Option<String>,
    pub isp: Option<Isp>,
}

impl IspDetection {
    pub fn detected(&self) -> bool {
        self.isp.is_some()
    }
}
