use crate::config::ConfigError;
use crate::resolver_address::{ResolverAddress, DEFAULT_RESOLVERS, DNS_PORT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Upstream resolvers as IPv4 literals, tried strictly in this order.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Applied separately to the send and to the receive of each attempt.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Draw a random transaction ID per attempt instead of the fixed ID 1.
    #[serde(default)]
    pub randomize_query_id: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            randomize_query_id: false,
        }
    }
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn resolver_addresses(&self) -> Result<Vec<ResolverAddress>, ConfigError> {
        ResolverAddress::parse_list(&self.servers)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No resolver servers configured".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation(
                "Resolver port cannot be 0".to_string(),
            ));
        }
        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }
        self.resolver_addresses().map(|_| ())
    }
}

fn default_servers() -> Vec<String> {
    DEFAULT_RESOLVERS.iter().map(|r| r.to_string()).collect()
}

fn default_port() -> u16 {
    DNS_PORT
}

fn default_query_timeout_ms() -> u64 {
    5000
}
