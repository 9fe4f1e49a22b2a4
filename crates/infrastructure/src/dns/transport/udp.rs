//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). If the response has the TC
//! (truncated) bit set, the caller should retry via TCP.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use scitra_dns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn transport_error(&self, reason: impl ToString) -> DomainError {
        DomainError::TransportError {
            server: self.server_addr.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.transport_error(format!("failed to bind UDP socket: {}", e)))?;

        let deadline = Instant::now() + timeout;
        let timed_out = || DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        };

        let bytes_sent = timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| self.transport_error(e))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        // Datagrams from other sources do not extend the deadline.
        loop {
            let (bytes_received, from_addr) =
                timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| timed_out())?
                    .map_err(|e| self.transport_error(e))?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %self.server_addr, bytes_received, "UDP response received");

            return Ok(TransportResponse {
                bytes: recv_buf,
                protocol_used: "UDP",
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let addr: SocketAddr = "8.8.8.8:53".parse().unwrap();
        let transport = UdpTransport::new(addr);
        assert_eq!(transport.server_addr, addr);
    }

    #[tokio::test]
    async fn test_udp_timeout() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let transport = UdpTransport::new(silent.local_addr().unwrap());

        let result = transport.send(&[0u8; 12], Duration::from_millis(50)).await;

        assert!(matches!(result, Err(DomainError::TransportTimeout { .. })));
    }

    #[tokio::test]
    async fn test_udp_timeout_not_extended_by_foreign_datagrams() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let transport = UdpTransport::new(silent.local_addr().unwrap());

        tokio::spawn(async move {
            let mut buf = [0u8; 512];
            let Ok((_, client)) = silent.recv_from(&mut buf).await else {
                return;
            };
            let intruder = UdpSocket::bind("127.0.0.1:0").await.unwrap();
            for _ in 0..100 {
                let _ = intruder.send_to(b"junk", client).await;
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        });

        let started = std::time::Instant::now();
        let result = transport.send(&[0u8; 12], Duration::from_millis(100)).await;
        let elapsed = started.elapsed();

        assert!(matches!(result, Err(DomainError::TransportTimeout { .. })));
        assert!(
            elapsed < Duration::from_millis(500),
            "timeout fired after {:?}",
            elapsed
        );
    }
}
