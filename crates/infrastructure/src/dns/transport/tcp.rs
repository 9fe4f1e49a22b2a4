//! TCP Transport for DNS queries (RFC 1035 §4.2.2), one connection per query.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use scitra_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    async fn connect(&self, deadline: Instant) -> Result<TcpStream, DomainError> {
        let stream = timeout_at(deadline, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| DomainError::TransportError {
                server: self.server_addr.to_string(),
                reason: format!("connect failed: {}", e),
            })?;

        stream
            .set_nodelay(true)
            .map_err(|e| DomainError::TransportError {
                server: self.server_addr.to_string(),
                reason: format!("failed to set TCP_NODELAY: {}", e),
            })?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let deadline = Instant::now() + timeout;
        let mut stream = self.connect(deadline).await?;

        timeout_at(deadline, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| self.timeout_error())??;

        debug!(server = %self.server_addr, message_len = message_bytes.len(), "TCP query sent");

        let response_bytes = timeout_at(deadline, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| self.timeout_error())??;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }
}

async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::WriteFailed(format!("message too large: {} bytes", message_bytes.len()))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::WriteFailed(format!("failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::WriteFailed(format!("failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::WriteFailed(format!("failed to flush stream: {}", e)))?;

    Ok(())
}

async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await.map_err(|e| {
        DomainError::InvalidDnsResponse(format!("failed to read message length: {}", e))
    })?;

    let message_len = usize::from(u16::from_be_bytes(len_buf));

    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await.map_err(|e| {
        DomainError::InvalidDnsResponse(format!("failed to read message body: {}", e))
    })?;

    Ok(message)
}
