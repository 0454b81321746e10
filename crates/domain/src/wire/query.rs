use super::header::{DnsHeader, HEADER_LEN};
use crate::dns_record::{RecordClass, RecordType};
use crate::errors::DnsError;
use crate::hostname::Hostname;

/// QTYPE and QCLASS trailing the question name.
const QUESTION_TRAILER_LEN: usize = 4;

/// One outgoing DNS query, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPacket {
    id: u16,
    bytes: Vec<u8>,
}

impl QueryPacket {
    /// Encodes a recursive A/IN query for `hostname` with transaction `id`.
    ///
    /// Layout: 12-byte header (RD set, QDCOUNT 1), the name as length-prefixed
    /// labels closed by a zero byte, then QTYPE and QCLASS.
    pub fn encode(hostname: &Hostname, id: u16) -> Self {
        let mut bytes =
            Vec::with_capacity(HEADER_LEN + hostname.len() + 2 + QUESTION_TRAILER_LEN);

        DnsHeader::query(id).write_to(&mut bytes);

        for label in hostname.labels() {
            // Hostname guarantees 1..=63 bytes per label.
            bytes.push(label.len() as u8);
            bytes.extend_from_slice(label.as_bytes());
        }
        bytes.push(0);

        bytes.extend_from_slice(&RecordType::A.to_u16().to_be_bytes());
        bytes.extend_from_slice(&RecordClass::IN.to_u16().to_be_bytes());

        Self { id, bytes }
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Validates `hostname` and encodes the query in one step.
pub fn encode_query(hostname: &str, id: u16) -> Result<QueryPacket, DnsError> {
    let hostname = Hostname::parse(hostname)?;
    Ok(QueryPacket::encode(&hostname, id))
}
