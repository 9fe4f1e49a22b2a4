use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::AAAA;
use hickory_proto::rr::{RData, Record};
use scitra_dns_domain::EncodedAddress;

/// Builds the replies the translating handler writes itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSynthesizer {
    ttl: u32,
}

impl ResponseSynthesizer {
    pub fn new(ttl: u32) -> Self {
        Self { ttl }
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Successful reply to `request` without any answer records.
    pub fn empty(&self, request: &Message) -> Message {
        Self::reply_to(request)
    }

    /// Authoritative reply carrying one AAAA record for the question.
    pub fn answer(&self, request: &Message, encoded: EncodedAddress) -> Message {
        let mut reply = Self::reply_to(request);
        reply.set_authoritative(true);

        if let Some(question) = request.queries().first() {
            let mut record = Record::from_rdata(
                question.name().clone(),
                self.ttl,
                RData::AAAA(AAAA(encoded.to_ipv6())),
            );
            record.set_dns_class(question.query_class());
            reply.add_answer(record);
        }

        reply
    }

    fn reply_to(request: &Message) -> Message {
        let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
        reply.set_recursion_desired(request.recursion_desired());
        reply.set_checking_disabled(request.checking_disabled());
        reply.set_response_code(ResponseCode::NoError);
        if let Some(question) = request.queries().first() {
            reply.add_query(question.clone());
        }
        reply
    }
}
