use super::reader::ByteReader;
use crate::errors::DnsError;

const POINTER_MASK: u8 = 0xC0;

/// Advances past an encoded name without decoding it.
///
/// Labels are skipped by their length prefix. A length byte with either of
/// the two high bits set starts a compression pointer: its second byte is
/// consumed and the name ends there. The pointer target is not visited.
pub fn skip_name(reader: &mut ByteReader<'_>) -> Result<(), DnsError> {
    loop {
        let len = reader.read_u8()?;
        if len == 0 {
            return Ok(());
        }
        if len & POINTER_MASK != 0 {
            reader.skip(1)?;
            return Ok(());
        }
        reader.skip(len as usize)?;
    }
}
