use crate::ports::DnsHandler;
use crate::services::{next_or_failure, CaptureWriter};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use scitra_dns_domain::{Attribute, DomainError, ScionAddr};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::trace;

/// Transaction ID of the internal TXT sub-query.
pub const METADATA_QUERY_ID: u16 = 1337;

/// Looks up the `scion=` attribute of a name through the rest of the chain.
pub struct MetadataResolver<'a> {
    caller: &'static str,
    next: Option<&'a Arc<dyn DnsHandler>>,
}

impl<'a> MetadataResolver<'a> {
    pub fn new(caller: &'static str, next: Option<&'a Arc<dyn DnsHandler>>) -> Self {
        Self { caller, next }
    }

    /// Returns the SCION address advertised for `name`, if any.
    ///
    /// Only a failing chain is an error; a missing or malformed attribute is
    /// reported as `None`.
    pub async fn resolve(
        &self,
        name: &Name,
        remote: Option<SocketAddr>,
    ) -> Result<Option<ScionAddr>, DomainError> {
        let query = Self::build_query(name);
        let mut capture = CaptureWriter::for_remote(remote);

        let rcode = next_or_failure(self.caller, self.next, &query, &mut capture).await?;
        if rcode != ResponseCode::NoError {
            return Ok(None);
        }

        Ok(capture
            .message()
            .filter(|response| response.response_code() == ResponseCode::NoError)
            .and_then(Self::scan))
    }

    pub fn build_query(name: &Name) -> Message {
        let mut query = Query::new();
        query.set_name(name.clone());
        query.set_query_type(RecordType::TXT);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(METADATA_QUERY_ID, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);
        message
    }

    /// First well-formed `scion=` attribute with an IP host, in answer order.
    pub fn scan(response: &Message) -> Option<ScionAddr> {
        response
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::TXT(txt) => Some(txt),
                _ => None,
            })
            .flat_map(|txt| txt.iter())
            .find_map(|data| Self::parse_candidate(&String::from_utf8_lossy(data)))
    }

    fn parse_candidate(text: &str) -> Option<ScionAddr> {
        let attribute = Attribute::parse(text).ok()?;
        if !attribute.is_scion() {
            return None;
        }

        match attribute.value.parse::<ScionAddr>() {
            Ok(addr) if addr.host.is_ip() => Some(addr),
            Ok(addr) => {
                trace!(value = %attribute.value, host = %addr.host, "Skipping non-IP SCION host");
                None
            }
            Err(e) => {
                trace!(value = %attribute.value, error = %e, "Skipping malformed SCION attribute");
                None
            }
        }
    }
}
