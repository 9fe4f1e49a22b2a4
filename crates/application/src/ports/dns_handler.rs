use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use scitra_dns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;

/// Sink for the response to a DNS request.
#[async_trait]
pub trait ResponseWriter: Send {
    async fn write_message(&mut self, message: &Message) -> Result<(), DomainError>;

    /// Address of the client the response goes to, when known.
    fn remote_addr(&self) -> Option<SocketAddr> {
        None
    }
}

/// One link of the handler chain.
///
/// A handler either writes a response through `writer` or hands the request
/// to the next handler. The returned code is the response code of whatever
/// was written; when an error-class code (SERVFAIL, REFUSED, FORMERR, NOTIMP)
/// is returned without a write, the server answers on the handler's behalf.
#[async_trait]
pub trait DnsHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError>;
}

pub type NextHandler = Option<Arc<dyn DnsHandler>>;
