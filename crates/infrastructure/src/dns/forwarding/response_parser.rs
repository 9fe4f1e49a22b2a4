use hickory_proto::op::{Message, ResponseCode};
use scitra_dns_domain::DomainError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    pub truncated: bool,

    pub message: Message,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        debug!(
            rcode = ?rcode,
            answers = message.answers().len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            rcode,
            truncated,
            message,
        })
    }

    /// Parse and check that the response answers the query sent as `expected_id`.
    pub fn parse_for(response_bytes: &[u8], expected_id: u16) -> Result<DnsResponse, DomainError> {
        let response = Self::parse(response_bytes)?;

        if response.message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                response.message.id(),
                expected_id
            )));
        }

        Ok(response)
    }
}
