use ferrous_stub_domain::DnsError;
use std::fmt;

/// Where a single per-resolver attempt currently is.
///
/// An attempt runs `Encoding → Sending → Receiving → Decoding`; a failure at
/// any stage ends the attempt and the driver starts over with the next
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStage {
    Encoding,
    Sending,
    Receiving,
    Decoding,
}

impl AttemptStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptStage::Encoding => "encoding",
            AttemptStage::Sending => "sending",
            AttemptStage::Receiving => "receiving",
            AttemptStage::Decoding => "decoding",
        }
    }

    pub(crate) fn fail(self, error: DnsError) -> AttemptFailure {
        AttemptFailure { stage: self, error }
    }
}

impl fmt::Display for AttemptStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub(crate) struct AttemptFailure {
    pub stage: AttemptStage,
    pub error: DnsError,
}
