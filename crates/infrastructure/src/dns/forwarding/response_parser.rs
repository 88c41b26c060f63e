use k_resolver_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{Record, RecordType as HickoryRecordType};
use std::net::SocketAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// Text form of every answer whose type matches the question.
    ///
    /// CNAME chain entries are skipped unless CNAME was asked for.
    pub fn rendered_answers(&self, wanted: HickoryRecordType) -> Vec<String> {
        self.answers
            .iter()
            .filter(|record| record.record_type() == wanted)
            .map(|record| record.data().to_string())
            .collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a reply from `server`; undecodable bytes are a transport failure.
    pub fn parse(response_bytes: &[u8], server: SocketAddr) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| DomainError::TransportError {
            server: server.to_string(),
            message: format!("malformed DNS response: {}", e),
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
