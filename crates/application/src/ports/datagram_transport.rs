use ferrous_stub_domain::{DnsError, ResolverAddress};
use std::time::Duration;

/// Unreliable datagram channel to one resolver at a time.
///
/// The driver calls `set_destination` and `open` at the start of every
/// attempt and `close` on every exit from it, so an implementation never has
/// to serve two destinations with one open handle.
pub trait DatagramTransport {
    fn set_destination(&mut self, address: ResolverAddress, port: u16);

    fn open(&mut self) -> Result<(), DnsError>;

    /// Returns the number of bytes handed to the network.
    fn send(&mut self, bytes: &[u8], timeout: Duration) -> Result<usize, DnsError>;

    /// Returns the number of bytes written into `buf`.
    fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, DnsError>;

    fn close(&mut self) -> Result<(), DnsError>;

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

impl<T: DatagramTransport + ?Sized> DatagramTransport for &mut T {
    fn set_destination(&mut self, address: ResolverAddress, port: u16) {
        (**self).set_destination(address, port)
    }

    fn open(&mut self) -> Result<(), DnsError> {
        (**self).open()
    }

    fn send(&mut self, bytes: &[u8], timeout: Duration) -> Result<usize, DnsError> {
        (**self).send(bytes, timeout)
    }

    fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, DnsError> {
        (**self).receive(buf, timeout)
    }

    fn close(&mut self) -> Result<(), DnsError> {
        (**self).close()
    }

    fn protocol_name(&self) -> &'static str {
        (**self).protocol_name()
    }
}

impl<T: DatagramTransport + ?Sized> DatagramTransport for Box<T> {
    fn set_destination(&mut self, address: ResolverAddress, port: u16) {
        (**self).set_destination(address, port)
    }

    fn open(&mut self) -> Result<(), DnsError> {
        (**self).open()
    }

    fn send(&mut self, bytes: &[u8], timeout: Duration) -> Result<usize, DnsError> {
        (**self).send(bytes, timeout)
    }

    fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, DnsError> {
        (**self).receive(buf, timeout)
    }

    fn close(&mut self) -> Result<(), DnsError> {
        (**self).close()
    }

    fn protocol_name(&self) -> &'static str {
        (**self).protocol_name()
    }
}
