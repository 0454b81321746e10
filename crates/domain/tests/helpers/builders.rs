#![allow(dead_code)]

/// Assembles synthetic DNS responses byte by byte.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    answer_count: Option<u16>,
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Compression pointer to the question name at offset 12.
pub const POINTER_TO_QUESTION: [u8; 2] = [0xC0, 0x0C];

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            flags: 0x8180,
            questions: Vec::new(),
            answers: Vec::new(),
            answer_count: None,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Overrides the ANCOUNT written to the header, regardless of the
    /// records actually appended.
    pub fn answer_count(mut self, count: u16) -> Self {
        self.answer_count = Some(count);
        self
    }

    pub fn question(mut self, name: &str) -> Self {
        let mut q = encode_name(name);
        q.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        self.questions.push(q);
        self
    }

    pub fn record(mut self, owner: &[u8], rtype: u16, class: u16, ttl: u32, rdata: &[u8]) -> Self {
        let mut rr = owner.to_vec();
        rr.extend_from_slice(&rtype.to_be_bytes());
        rr.extend_from_slice(&class.to_be_bytes());
        rr.extend_from_slice(&ttl.to_be_bytes());
        rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        rr.extend_from_slice(rdata);
        self.answers.push(rr);
        self
    }

    pub fn a_record(self, octets: [u8; 4]) -> Self {
        self.record(&POINTER_TO_QUESTION, 1, 1, 300, &octets)
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        let ancount = self.answer_count.unwrap_or(self.answers.len() as u16);
        buf.extend_from_slice(&ancount.to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0]);
        for q in &self.questions {
            buf.extend_from_slice(q);
        }
        for rr in &self.answers {
            buf.extend_from_slice(rr);
        }
        buf
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
