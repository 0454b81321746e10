use crate::dns::transport::UdpTransport;
use ferrous_stub_application::use_cases::{QueryIdPolicy, ResolveHostnameUseCase};
use ferrous_stub_domain::{ConfigError, ResolverConfig};
use tracing::info;

/// Wires a [`ResolverConfig`] into a resolver backed by [`UdpTransport`].
pub struct StubResolverBuilder {
    config: ResolverConfig,
    transport: UdpTransport,
}

impl StubResolverBuilder {
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
            transport: UdpTransport::new(),
        }
    }

    pub fn from_config(
        config: &ResolverConfig,
    ) -> Result<ResolveHostnameUseCase<UdpTransport>, ConfigError> {
        Self::new().with_config(config.clone()).build()
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_transport(mut self, transport: UdpTransport) -> Self {
        self.transport = transport;
        self
    }

    pub fn build(self) -> Result<ResolveHostnameUseCase<UdpTransport>, ConfigError> {
        self.config.validate()?;
        let servers = self.config.resolver_addresses()?;

        info!(
            servers = servers.len(),
            port = self.config.port,
            timeout_ms = self.config.query_timeout_ms,
            randomize_query_id = self.config.randomize_query_id,
            "Building stub resolver"
        );

        Ok(ResolveHostnameUseCase::new(self.transport)
            .with_servers(servers)
            .with_port(self.config.port)
            .with_timeout(self.config.query_timeout())
            .with_query_id_policy(QueryIdPolicy::from_randomize_flag(
                self.config.randomize_query_id,
            )))
    }
}

impl Default for StubResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
