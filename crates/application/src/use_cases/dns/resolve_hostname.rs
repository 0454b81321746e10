use super::attempt::{AttemptFailure, AttemptStage};
use super::query_id::QueryIdPolicy;
use crate::ports::DatagramTransport;
use ferrous_stub_domain::wire::MAX_RESPONSE_LEN;
use ferrous_stub_domain::{
    decode_response, DnsError, Hostname, QueryPacket, ResolvedAddress, ResolverAddress,
    DEFAULT_RESOLVERS, DNS_PORT,
};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves a hostname to its first IPv4 address by asking a fixed, ordered
/// list of resolvers one after another.
///
/// Each resolver gets exactly one attempt. Any failure during an attempt
/// (transport, header validation, missing A record) moves on to the next
/// resolver; only exhausting the list fails the call.
pub struct ResolveHostnameUseCase<T: DatagramTransport> {
    transport: T,
    servers: Vec<ResolverAddress>,
    port: u16,
    timeout: Duration,
    id_policy: QueryIdPolicy,
}

impl<T: DatagramTransport> ResolveHostnameUseCase<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            servers: DEFAULT_RESOLVERS.to_vec(),
            port: DNS_PORT,
            timeout: DEFAULT_QUERY_TIMEOUT,
            id_policy: QueryIdPolicy::default(),
        }
    }

    pub fn with_servers(mut self, servers: Vec<ResolverAddress>) -> Self {
        self.servers = servers;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_query_id_policy(mut self, id_policy: QueryIdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn servers(&self) -> &[ResolverAddress] {
        &self.servers
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn execute(&mut self, hostname: &str) -> Result<ResolvedAddress, DnsError> {
        let hostname = Hostname::parse(hostname)?;

        debug!(
            hostname = %hostname,
            servers = self.servers.len(),
            protocol = self.transport.protocol_name(),
            "Resolving sequentially"
        );

        for position in 0..self.servers.len() {
            let server = self.servers[position];

            match self.attempt(&hostname, server) {
                Ok(address) => {
                    info!(
                        hostname = %hostname,
                        server = %server,
                        address = %address,
                        position,
                        "Hostname resolved"
                    );
                    return Ok(address);
                }
                Err(failure) => {
                    warn!(
                        hostname = %hostname,
                        server = %server,
                        stage = %failure.stage,
                        error = %failure.error,
                        position,
                        "Failing over"
                    );
                }
            }
        }

        Err(DnsError::NoAnswer(hostname.to_string()))
    }

    /// Same as [`execute`](Self::execute), writing the dotted-decimal address
    /// into `out` on success. `out` is left untouched on failure.
    pub fn execute_into(&mut self, hostname: &str, out: &mut String) -> Result<(), DnsError> {
        let address = self.execute(hostname)?;
        address.write_to(out);
        Ok(())
    }

    fn attempt(
        &mut self,
        hostname: &Hostname,
        server: ResolverAddress,
    ) -> Result<ResolvedAddress, AttemptFailure> {
        trace!(server = %server, stage = %AttemptStage::Encoding, "Attempt stage");
        let query = QueryPacket::encode(hostname, self.id_policy.next_id());

        self.transport.set_destination(server, self.port);
        let outcome = self.exchange(&query, server);

        if let Err(e) = self.transport.close() {
            debug!(server = %server, error = %e, "Failed to close transport");
        }

        outcome
    }

    fn exchange(
        &mut self,
        query: &QueryPacket,
        server: ResolverAddress,
    ) -> Result<ResolvedAddress, AttemptFailure> {
        let endpoint = server.socket_addr(self.port);

        trace!(server = %server, stage = %AttemptStage::Sending, "Attempt stage");
        self.transport
            .open()
            .map_err(|e| AttemptStage::Sending.fail(e))?;

        let sent = self
            .transport
            .send(query.as_bytes(), self.timeout)
            .map_err(|e| AttemptStage::Sending.fail(e))?;
        if sent != query.len() {
            return Err(AttemptStage::Sending.fail(DnsError::transport(
                endpoint,
                format!("short send: {} of {} bytes", sent, query.len()),
            )));
        }
        debug!(server = %endpoint, id = query.id(), bytes_sent = sent, "Query sent");

        trace!(server = %server, stage = %AttemptStage::Receiving, "Attempt stage");
        let mut response = vec![0u8; MAX_RESPONSE_LEN];
        let received = self
            .transport
            .receive(&mut response, self.timeout)
            .map_err(|e| AttemptStage::Receiving.fail(e))?;
        if received == 0 {
            return Err(AttemptStage::Receiving.fail(DnsError::transport(
                endpoint,
                "empty datagram",
            )));
        }
        let received = received.min(response.len());
        debug!(server = %endpoint, bytes_received = received, "Response received");

        trace!(server = %server, stage = %AttemptStage::Decoding, "Attempt stage");
        decode_response(&response[..received], query.id())
            .map_err(|e| AttemptStage::Decoding.fail(e))
    }
}
