#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const MOCK_ANSWER: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockMode {
    /// Answer every UDP query with one A record.
    Answer,
    /// Answer UDP with the TC bit and no records; answer TCP in full.
    TruncateUdp,
    /// Receive queries and never answer.
    Silent,
}

/// Upstream DNS server on loopback, listening on UDP and TCP of the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(mode: MockMode) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            let response = match mode {
                                MockMode::Answer => Self::build_mock_response(&buf[..len], false),
                                MockMode::TruncateUdp => Self::build_mock_response(&buf[..len], true),
                                MockMode::Silent => continue,
                            };
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = Self::build_mock_response(&query, false);
                                let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&response).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    /// Response echoing the query's ID and question, plus one A record
    /// unless `truncated`.
    pub fn build_mock_response(query: &[u8], truncated: bool) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]);

        response.push(if truncated { 0x83 } else { 0x81 });
        response.push(0x80);

        response.extend_from_slice(&query[4..6]);

        response.extend_from_slice(if truncated { &[0x00, 0x00] } else { &[0x00, 0x01] });

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&[0x00, 0x00]);

        if query.len() > 12 {
            response.extend_from_slice(&query[12..]);
        }

        if !truncated {
            response.extend_from_slice(&[
                0xc0, 0x0c,
                0x00, 0x01,
                0x00, 0x01,
                0x00, 0x00, 0x00, 0x3c,
                0x00, 0x04,
            ]);
            response.extend_from_slice(&MOCK_ANSWER.octets());
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
