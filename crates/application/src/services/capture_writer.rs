use crate::ports::ResponseWriter;
use async_trait::async_trait;
use hickory_proto::op::Message;
use scitra_dns_domain::DomainError;
use std::net::SocketAddr;

/// In-memory [`ResponseWriter`] that keeps the last written message instead
/// of sending it anywhere.
///
/// Used for sub-queries issued from inside the chain; the captured response
/// never reaches the client.
#[derive(Debug, Default)]
pub struct CaptureWriter {
    remote: Option<SocketAddr>,
    message: Option<Message>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture on behalf of `remote`, so handlers further down still see the
    /// original client address.
    pub fn for_remote(remote: Option<SocketAddr>) -> Self {
        Self {
            remote,
            message: None,
        }
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn into_message(self) -> Option<Message> {
        self.message
    }

    pub fn has_written(&self) -> bool {
        self.message.is_some()
    }
}

#[async_trait]
impl ResponseWriter for CaptureWriter {
    async fn write_message(&mut self, message: &Message) -> Result<(), DomainError> {
        self.message = Some(message.clone());
        Ok(())
    }

    fn remote_addr(&self) -> Option<SocketAddr> {
        self.remote
    }
}
