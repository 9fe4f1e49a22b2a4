use crate::dns::forwarding::DnsForwarder;
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use scitra_dns_application::ports::{DnsHandler, ResponseWriter};
use scitra_dns_domain::DomainError;
use tracing::debug;

/// Terminal handler that relays every request to the upstream servers.
pub struct ForwardHandler {
    forwarder: DnsForwarder,
}

impl ForwardHandler {
    pub const NAME: &'static str = "forward";

    pub fn new(forwarder: DnsForwarder) -> Self {
        Self { forwarder }
    }
}

#[async_trait]
impl DnsHandler for ForwardHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        let response = self.forwarder.forward(request).await?;

        debug!(
            id = request.id(),
            rcode = ?response.rcode,
            answers = response.message.answers().len(),
            "Upstream response relayed"
        );

        writer.write_message(&response.message).await?;

        // Whatever the upstream said, the response has been written.
        Ok(ResponseCode::NoError)
    }
}
