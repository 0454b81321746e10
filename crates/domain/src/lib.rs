//! Ferrous Stub Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod hostname;
pub mod resolved_address;
pub mod resolver_address;
pub mod wire;

pub use config::{Config, ConfigError, ConfigOverrides, LoggingConfig, ResolverConfig};
pub use dns_record::{RecordClass, RecordType};
pub use errors::DnsError;
pub use hostname::{Hostname, MAX_HOSTNAME_LEN};
pub use resolved_address::ResolvedAddress;
pub use resolver_address::{ResolverAddress, DEFAULT_RESOLVERS, DNS_PORT};
pub use wire::{decode_response, encode_query, DnsHeader, QueryPacket, ResponseCode};
