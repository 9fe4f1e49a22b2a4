//! DNS Message Builder
//!
//! Prepares requests from the handler chain for the wire. Forwarded queries
//! get a fresh random ID so upstream answers can be matched independently of
//! the ID the client picked.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use scitra_dns_domain::DomainError;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Copy `request` under a random ID and serialize it.
    ///
    /// # Returns
    /// The ID used on the wire and the serialized message bytes.
    pub fn build_forward_query(request: &Message) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);

        let mut message = request.clone();
        let mut header = *message.header();
        header.set_id(id);
        message.set_header(header);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Error reply for `request`: same ID, opcode and question, no records.
    pub fn build_error_response(request: &Message, code: ResponseCode) -> Message {
        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(true);
        response.set_checking_disabled(request.checking_disabled());
        response.set_response_code(code);
        for query in request.queries() {
            response.add_query(query.clone());
        }
        response
    }

    /// FORMERR reply built from the raw header of an unparseable request.
    ///
    /// Returns `None` when there is no complete header or the datagram is
    /// itself a response.
    pub fn build_format_error(raw: &[u8]) -> Option<Message> {
        if raw.len() < 12 || raw[2] & 0x80 != 0 {
            return None;
        }

        let id = u16::from_be_bytes([raw[0], raw[1]]);
        let mut response = Message::new(id, MessageType::Response, OpCode::Query);
        response.set_recursion_desired(raw[2] & 0x01 != 0);
        response.set_response_code(ResponseCode::FormErr);
        Some(response)
    }

    /// Header and question of `response` with the TC bit set.
    pub fn build_truncated(response: &Message) -> Message {
        let mut truncated =
            Message::new(response.id(), MessageType::Response, response.op_code());
        truncated.set_authoritative(response.authoritative());
        truncated.set_recursion_desired(response.recursion_desired());
        truncated.set_recursion_available(response.recursion_available());
        truncated.set_checking_disabled(response.checking_disabled());
        truncated.set_response_code(response.response_code());
        truncated.set_truncated(true);
        for query in response.queries() {
            truncated.add_query(query.clone());
        }
        truncated
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::WriteFailed(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
