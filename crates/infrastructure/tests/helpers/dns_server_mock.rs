#![allow(dead_code)]
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    /// Echo the question and answer with one A record.
    Answer([u8; 4]),
    /// Send these bytes regardless of the query.
    Raw(Vec<u8>),
    /// Read the query and never answer.
    Silent,
}

/// Loopback DNS server running on its own thread.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MockDnsServer {
    pub fn start(reply: Reply) -> Result<Self, std::io::Error> {
        Self::start_on(SocketAddr::from(([127, 0, 0, 1], 0)), reply)
    }

    pub fn start_on(addr: SocketAddr, reply: Reply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(addr)?;
        socket.set_read_timeout(Some(Duration::from_millis(20)))?;
        let local_addr = socket.local_addr()?;

        let queries = Arc::new(AtomicUsize::new(0));
        let shutdown = Arc::new(AtomicBool::new(false));

        let handle = {
            let queries = queries.clone();
            let shutdown = shutdown.clone();
            thread::spawn(move || {
                let mut buf = vec![0u8; 512];
                while !shutdown.load(Ordering::Relaxed) {
                    let Ok((len, peer)) = socket.recv_from(&mut buf) else {
                        continue;
                    };
                    queries.fetch_add(1, Ordering::Relaxed);

                    let response = match &reply {
                        Reply::Answer(octets) => build_mock_response(&buf[..len], *octets),
                        Reply::Raw(bytes) => bytes.clone(),
                        Reply::Silent => continue,
                    };
                    let _ = socket.send_to(&response, peer);
                }
            })
        };

        Ok(Self {
            addr: local_addr,
            queries,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn queries_received(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn build_mock_response(query: &[u8], octets: [u8; 4]) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.push(0x81);
    response.push(0x80);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&query[12..]);
    response.extend_from_slice(&[
        0xc0, 0x0c, // pointer to question name
        0x00, 0x01, // A
        0x00, 0x01, // IN
        0x00, 0x00, 0x00, 0x3c, // TTL 60
        0x00, 0x04,
    ]);
    response.extend_from_slice(&octets);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_response_builder() {
        let query = vec![
            0xab, 0xcd, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x01,
        ];
        let response = build_mock_response(&query, [93, 184, 216, 34]);

        assert_eq!(&response[0..2], &[0xab, 0xcd]);
        assert_eq!(response[2] & 0x80, 0x80);
        assert_eq!(&response[response.len() - 4..], &[93, 184, 216, 34]);
    }

    #[test]
    fn test_short_query_gets_no_response() {
        assert!(build_mock_response(&[0x00, 0x01], [1, 2, 3, 4]).is_empty());
    }
}
