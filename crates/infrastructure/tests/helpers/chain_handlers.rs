use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{rdata, DNSClass, Name, RData, Record, RecordType};
use scitra_dns_application::ports::{DnsHandler, ResponseWriter};
use scitra_dns_domain::DomainError;
use std::net::Ipv6Addr;
use std::str::FromStr;

pub fn query(name: &str, record_type: RecordType) -> Message {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(0x4242, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);
    message
}

/// Answers every question with `count` AAAA records.
pub struct StaticHandler {
    pub count: usize,
}

#[async_trait]
impl DnsHandler for StaticHandler {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        for query in request.queries() {
            response.add_query(query.clone());
        }
        if let Some(question) = request.queries().first() {
            for i in 0..self.count {
                let ip = Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, i as u16);
                response.add_answer(Record::from_rdata(
                    question.name().clone(),
                    300,
                    RData::AAAA(rdata::AAAA(ip)),
                ));
            }
        }
        writer.write_message(&response).await?;
        Ok(ResponseCode::NoError)
    }
}

/// Fails every request with a chain error.
pub struct FailingHandler;

#[async_trait]
impl DnsHandler for FailingHandler {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn serve_dns(
        &self,
        _request: &Message,
        _writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        Err(DomainError::TransportAllServersUnreachable)
    }
}

/// Returns `code` without writing anything.
pub struct SilentHandler {
    pub code: ResponseCode,
}

#[async_trait]
impl DnsHandler for SilentHandler {
    fn name(&self) -> &'static str {
        "silent"
    }

    async fn serve_dns(
        &self,
        _request: &Message,
        _writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        Ok(self.code)
    }
}
