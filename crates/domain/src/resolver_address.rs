use crate::config::ConfigError;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

pub const DNS_PORT: u16 = 53;

/// Public resolvers consulted in this order until one answers.
pub const DEFAULT_RESOLVERS: [ResolverAddress; 5] = [
    ResolverAddress::new(8, 8, 8, 8),
    ResolverAddress::new(209, 244, 0, 3),
    ResolverAddress::new(84, 200, 69, 80),
    ResolverAddress::new(8, 26, 56, 26),
    ResolverAddress::new(208, 67, 222, 222),
];

/// IPv4 address of an upstream DNS server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolverAddress(Ipv4Addr);

impl ResolverAddress {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self(Ipv4Addr::new(a, b, c, d))
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.0
    }

    pub fn socket_addr(&self, port: u16) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.0, port))
    }

    /// Parses an ordered list of IPv4 literals, failing on the first one that
    /// is not an address.
    pub fn parse_list<S: AsRef<str>>(servers: &[S]) -> Result<Vec<Self>, ConfigError> {
        servers
            .iter()
            .map(|s| {
                s.as_ref().parse::<ResolverAddress>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid resolver '{}': {}", s.as_ref(), e))
                })
            })
            .collect()
    }
}

impl From<Ipv4Addr> for ResolverAddress {
    fn from(ip: Ipv4Addr) -> Self {
        Self(ip)
    }
}

impl FromStr for ResolverAddress {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Ipv4Addr>().map(Self)
    }
}

impl fmt::Display for ResolverAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
