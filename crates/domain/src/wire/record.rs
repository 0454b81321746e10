use super::name::skip_name;
use super::reader::ByteReader;
use crate::dns_record::{RecordClass, RecordType};
use crate::errors::DnsError;

/// A resource record parsed in place. The owner name is skipped, not decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRecord<'a> {
    pub rtype: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub rdata: &'a [u8],
}

impl<'a> ResourceRecord<'a> {
    /// Reads one record and leaves the cursor exactly RDLENGTH bytes past the
    /// fixed fields, whatever the record type.
    pub fn read(reader: &mut ByteReader<'a>) -> Result<Self, DnsError> {
        skip_name(reader)?;
        let rtype = RecordType::from_u16(reader.read_u16()?);
        let class = RecordClass::from_u16(reader.read_u16()?);
        let ttl = reader.read_u32()?;
        let rdlength = reader.read_u16()? as usize;
        let rdata = reader.read_bytes(rdlength)?;

        Ok(Self {
            rtype,
            class,
            ttl,
            rdata,
        })
    }

    pub fn is_internet_address(&self) -> bool {
        self.rtype == RecordType::A && self.class == RecordClass::IN
    }
}
