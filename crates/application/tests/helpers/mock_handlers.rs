#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use scitra_dns_application::ports::{DnsHandler, ResponseWriter};
use scitra_dns_domain::DomainError;
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::{Mutex, RwLock};

pub const MOCK_A: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);
pub const MOCK_AAAA: Ipv6Addr = Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x34);

/// Builds a recursive query for `name` with a single question.
pub fn query(name: &str, record_type: RecordType) -> Message {
    let mut q = Query::new();
    q.set_name(Name::from_ascii(name).unwrap());
    q.set_query_type(record_type);
    q.set_query_class(DNSClass::IN);

    let mut message = Message::new(0x4242, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(q);
    message
}

/// Terminal handler standing in for the rest of the chain.
///
/// Answers TXT queries from configured records, A/AAAA queries with fixed
/// addresses, and records every request it sees.
pub struct MockNextHandler {
    txt_answers: RwLock<HashMap<String, Vec<Record>>>,
    rcodes: RwLock<HashMap<String, ResponseCode>>,
    should_fail: RwLock<bool>,
    requests: Mutex<Vec<(Message, Option<SocketAddr>)>>,
}

impl MockNextHandler {
    pub fn new() -> Self {
        Self {
            txt_answers: RwLock::new(HashMap::new()),
            rcodes: RwLock::new(HashMap::new()),
            should_fail: RwLock::new(false),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// One TXT record per entry, each with the given strings.
    pub fn set_txt(&self, name: &str, records: Vec<Vec<&str>>) {
        let owner = Name::from_ascii(name).unwrap();
        let answers = records
            .into_iter()
            .map(|strings| {
                let txt = TXT::new(strings.into_iter().map(str::to_string).collect());
                Record::from_rdata(owner.clone(), 300, RData::TXT(txt))
            })
            .collect();
        self.set_answers(name, answers);
    }

    pub fn set_answers(&self, name: &str, answers: Vec<Record>) {
        self.txt_answers
            .write()
            .unwrap()
            .insert(name.to_string(), answers);
    }

    pub fn set_rcode(&self, name: &str, rcode: ResponseCode) {
        self.rcodes.write().unwrap().insert(name.to_string(), rcode);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn requests(&self) -> Vec<Message> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    pub fn remotes(&self) -> Vec<Option<SocketAddr>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, remote)| *remote)
            .collect()
    }

    fn answers_for(&self, question: &Query) -> Vec<Record> {
        let owner = question.name().clone();
        match question.query_type() {
            RecordType::TXT => self
                .txt_answers
                .read()
                .unwrap()
                .get(&question.name().to_ascii())
                .cloned()
                .unwrap_or_default(),
            RecordType::A => vec![Record::from_rdata(owner, 60, RData::A(A(MOCK_A)))],
            RecordType::AAAA => vec![Record::from_rdata(owner, 60, RData::AAAA(AAAA(MOCK_AAAA)))],
            _ => vec![],
        }
    }
}

impl Default for MockNextHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsHandler for MockNextHandler {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        self.requests
            .lock()
            .unwrap()
            .push((request.clone(), writer.remote_addr()));

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::TransportAllServersUnreachable);
        }

        let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
        reply.set_recursion_desired(request.recursion_desired());
        reply.set_recursion_available(true);

        let mut rcode = ResponseCode::NoError;
        if let Some(question) = request.queries().first() {
            reply.add_query(question.clone());
            rcode = self
                .rcodes
                .read()
                .unwrap()
                .get(&question.name().to_ascii())
                .copied()
                .unwrap_or(ResponseCode::NoError);
            if rcode == ResponseCode::NoError {
                for answer in self.answers_for(question) {
                    reply.add_answer(answer);
                }
            }
        }
        reply.set_response_code(rcode);

        writer.write_message(&reply).await?;
        Ok(rcode)
    }
}
