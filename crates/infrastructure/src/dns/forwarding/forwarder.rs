use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::Transport;
use hickory_proto::op::Message;
use scitra_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends queries to a fixed list of upstream servers, in order.
pub struct DnsForwarder {
    servers: Vec<SocketAddr>,
    timeout: Duration,
    tcp_fallback: bool,
}

impl DnsForwarder {
    pub fn new(servers: Vec<SocketAddr>, timeout: Duration, tcp_fallback: bool) -> Self {
        Self {
            servers,
            timeout,
            tcp_fallback,
        }
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    /// Forward `request` to the first server that answers.
    ///
    /// The returned message carries the request's own ID.
    pub async fn forward(&self, request: &Message) -> Result<DnsResponse, DomainError> {
        for server in &self.servers {
            match self.query(*server, request).await {
                Ok(mut response) => {
                    let mut header = *response.message.header();
                    header.set_id(request.id());
                    response.message.set_header(header);
                    return Ok(response);
                }
                Err(e) => {
                    warn!(server = %server, error = %e, "Upstream query failed, trying next server");
                }
            }
        }

        Err(DomainError::TransportAllServersUnreachable)
    }

    /// Query a specific DNS server, retrying over TCP when the UDP answer is truncated.
    pub async fn query(
        &self,
        server: SocketAddr,
        request: &Message,
    ) -> Result<DnsResponse, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_forward_query(request)?;

        let udp = Transport::udp(server);
        let reply = udp.send(&request_bytes, self.timeout).await?;
        let response = ResponseParser::parse_for(&reply.bytes, id)?;
        debug!(server = %server, protocol = reply.protocol_used, "Upstream answered");

        if !response.truncated || !self.tcp_fallback {
            return Ok(response);
        }

        debug!(server = %server, "Truncated UDP response, retrying over TCP");

        let tcp = Transport::tcp(server);
        let reply = tcp.send(&request_bytes, self.timeout).await?;
        debug!(server = %server, protocol = reply.protocol_used, "Upstream answered");
        ResponseParser::parse_for(&reply.bytes, id)
    }
}
