use crate::errors::DnsError;
use std::fmt;
use std::str::FromStr;

/// Upper bound on the hostname accepted by the encoder. This bounds the query
/// buffer and is stricter than the 253 bytes DNS itself allows.
pub const MAX_HOSTNAME_LEN: usize = 128;

const MAX_LABEL_LEN: usize = 63;

/// A hostname that can be expressed as a DNS question name.
///
/// A single trailing dot is accepted and dropped, so `"example.com."` and
/// `"example.com"` encode to the same question.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    pub fn parse(input: &str) -> Result<Self, DnsError> {
        if input.is_empty() {
            return Err(DnsError::InvalidHostname("hostname is empty".into()));
        }
        if input.len() > MAX_HOSTNAME_LEN {
            return Err(DnsError::InvalidHostname(format!(
                "hostname is {} bytes, limit is {}",
                input.len(),
                MAX_HOSTNAME_LEN
            )));
        }
        if !input.is_ascii() {
            return Err(DnsError::InvalidHostname(format!(
                "'{}' contains non-ASCII characters",
                input
            )));
        }

        let name = input.strip_suffix('.').unwrap_or(input);
        if name.is_empty() {
            return Err(DnsError::InvalidHostname(
                "root name has no labels to query".into(),
            ));
        }

        for label in name.split('.') {
            if label.is_empty() {
                return Err(DnsError::InvalidHostname(format!(
                    "'{}' contains an empty label",
                    input
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DnsError::InvalidHostname(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl FromStr for Hostname {
    type Err = DnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
