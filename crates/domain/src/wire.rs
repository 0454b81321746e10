//! DNS wire format (RFC 1035 §4) for the subset a stub resolver needs:
//! building an A/IN query and pulling the first IPv4 address out of the reply.

mod header;
mod name;
mod query;
mod reader;
mod record;
mod response;

pub use header::{DnsHeader, ResponseCode, HEADER_LEN};
pub use name::skip_name;
pub use query::{encode_query, QueryPacket};
pub use reader::ByteReader;
pub use record::ResourceRecord;
pub use response::decode_response;

/// Capacity of the buffer a response is received into.
pub const MAX_RESPONSE_LEN: usize = 1024;
