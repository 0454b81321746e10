use super::header::DnsHeader;
use super::name::skip_name;
use super::reader::ByteReader;
use super::record::ResourceRecord;
use crate::errors::DnsError;
use crate::resolved_address::ResolvedAddress;
use tracing::debug;

const IPV4_RDATA_LEN: usize = 4;

/// Extracts the first A/IN address from a raw response.
///
/// The header must echo `expected_id` as a NOERROR standard-query response.
/// Echoed questions are skipped, then up to ANCOUNT answers are walked in
/// order; records of any other type or class are stepped over by RDLENGTH.
pub fn decode_response(bytes: &[u8], expected_id: u16) -> Result<ResolvedAddress, DnsError> {
    let mut reader = ByteReader::new(bytes);

    let header = DnsHeader::read(&mut reader)?;
    header.validate_response(expected_id)?;

    if header.truncated() {
        debug!(
            id = header.id,
            "Response has TC set, decoding the partial answer section"
        );
    }

    for _ in 0..header.question_count {
        skip_name(&mut reader)?;
        reader.skip(4)?;
    }

    for index in 0..header.answer_count {
        let record = ResourceRecord::read(&mut reader)?;

        if record.is_internet_address() {
            let octets: [u8; IPV4_RDATA_LEN] = record.rdata.try_into().map_err(|_| {
                DnsError::malformed(format!(
                    "A record carries {} bytes of RDATA, expected {}",
                    record.rdata.len(),
                    IPV4_RDATA_LEN
                ))
            })?;
            return Ok(ResolvedAddress::from_octets(octets));
        }

        debug!(
            index,
            rtype = %record.rtype,
            class = %record.class,
            rdlength = record.rdata.len(),
            "Skipping answer record"
        );
    }

    Err(DnsError::NoAddressRecord)
}
