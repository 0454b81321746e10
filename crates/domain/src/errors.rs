use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("DNS response carries no A record")]
    NoAddressRecord,

    #[error("No resolver returned an address for {0}")]
    NoAnswer(String),
}

impl DnsError {
    pub fn transport(server: impl ToString, reason: impl ToString) -> Self {
        DnsError::TransportError {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        DnsError::MalformedResponse(reason.into())
    }

    /// Errors that only disqualify the current resolver; the driver moves on
    /// to the next one.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DnsError::TransportError { .. }
                | DnsError::TransportTimeout { .. }
                | DnsError::MalformedResponse(_)
                | DnsError::NoAddressRecord
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DnsError::TransportError { .. } | DnsError::TransportTimeout { .. }
        )
    }
}
