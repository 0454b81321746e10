//! Blocking UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). The socket is connected to the
//! resolver, so the kernel drops datagrams arriving from any other source.

use ferrous_stub_application::ports::DatagramTransport;
use ferrous_stub_domain::{DnsError, ResolverAddress};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;
use tracing::debug;

/// DNS over UDP transport. One socket per `open`/`close` cycle.
#[derive(Debug, Default)]
pub struct UdpTransport {
    destination: Option<SocketAddr>,
    socket: Option<UdpSocket>,
}

impl UdpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(&self) -> Option<SocketAddr> {
        self.destination
    }

    pub fn is_open(&self) -> bool {
        self.socket.is_some()
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|s| s.local_addr().ok())
    }

    fn server_label(&self) -> String {
        self.destination
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "<unset>".to_string())
    }

    fn create_socket(server: SocketAddr) -> io::Result<UdpSocket> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

        let bind_addr = SocketAddr::from(([0, 0, 0, 0], 0));
        socket.bind(&bind_addr.into())?;
        socket.connect(&server.into())?;

        Ok(socket.into())
    }

    fn connected_socket(&self) -> Result<&UdpSocket, DnsError> {
        self.socket
            .as_ref()
            .ok_or_else(|| DnsError::transport(self.server_label(), "transport is not open"))
    }

    fn map_io_error(&self, e: io::Error) -> DnsError {
        match e.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => DnsError::TransportTimeout {
                server: self.server_label(),
            },
            _ => DnsError::transport(self.server_label(), e),
        }
    }
}

impl DatagramTransport for UdpTransport {
    fn set_destination(&mut self, address: ResolverAddress, port: u16) {
        self.destination = Some(address.socket_addr(port));
    }

    fn open(&mut self) -> Result<(), DnsError> {
        let server = self
            .destination
            .ok_or_else(|| DnsError::transport("<unset>", "no destination set"))?;

        if self.socket.take().is_some() {
            debug!(server = %server, "Replacing previously opened UDP socket");
        }

        let socket = Self::create_socket(server).map_err(|e| self.map_io_error(e))?;
        debug!(
            server = %server,
            local = ?socket.local_addr().ok(),
            "UDP socket opened"
        );
        self.socket = Some(socket);
        Ok(())
    }

    fn send(&mut self, bytes: &[u8], timeout: Duration) -> Result<usize, DnsError> {
        let socket = self.connected_socket()?;
        socket
            .set_write_timeout(Some(timeout))
            .map_err(|e| self.map_io_error(e))?;

        let sent = socket.send(bytes).map_err(|e| self.map_io_error(e))?;
        debug!(server = %self.server_label(), bytes_sent = sent, "UDP query sent");
        Ok(sent)
    }

    fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, DnsError> {
        let socket = self.connected_socket()?;
        socket
            .set_read_timeout(Some(timeout))
            .map_err(|e| self.map_io_error(e))?;

        let received = socket.recv(buf).map_err(|e| self.map_io_error(e))?;
        debug!(
            server = %self.server_label(),
            bytes_received = received,
            "UDP response received"
        );
        Ok(received)
    }

    fn close(&mut self) -> Result<(), DnsError> {
        if self.socket.take().is_some() {
            debug!(server = %self.server_label(), "UDP socket closed");
        }
        Ok(())
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
