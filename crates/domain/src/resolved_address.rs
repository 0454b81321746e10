use std::fmt::{self, Write};
use std::net::Ipv4Addr;

/// The IPv4 address extracted from the first A/IN answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedAddress(Ipv4Addr);

impl ResolvedAddress {
    pub fn from_octets(octets: [u8; 4]) -> Self {
        Self(Ipv4Addr::from(octets))
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.0
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }

    /// Writes the dotted-decimal form into caller-owned storage, replacing
    /// whatever it held.
    pub fn write_to(&self, out: &mut String) {
        out.clear();
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", self.0);
    }
}

impl From<Ipv4Addr> for ResolvedAddress {
    fn from(ip: Ipv4Addr) -> Self {
        Self(ip)
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}
