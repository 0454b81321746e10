#![allow(dead_code)]

use ferrous_stub_application::ports::DatagramTransport;
use ferrous_stub_domain::{DnsError, ResolverAddress};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    SetDestination(ResolverAddress, u16),
    Open,
    Send(Vec<u8>),
    Receive,
    Close,
}

/// What the fake network does for one destination.
#[derive(Debug, Clone)]
pub enum Script {
    FailOpen,
    FailSend,
    TimeoutReceive,
    EmptyReceive,
    /// Reply with these exact bytes.
    Respond(Vec<u8>),
    /// Reply with an A record for the question that was sent, echoing its ID.
    AnswerA([u8; 4]),
}

pub struct MockTransport {
    scripts: HashMap<ResolverAddress, Script>,
    destination: Option<(ResolverAddress, u16)>,
    last_query: Vec<u8>,
    events: Vec<TransportEvent>,
    fail_close: bool,
    is_open: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            destination: None,
            last_query: Vec::new(),
            events: Vec::new(),
            fail_close: false,
            is_open: false,
        }
    }

    pub fn script(mut self, server: &str, script: Script) -> Self {
        self.scripts.insert(server.parse().unwrap(), script);
        self
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub fn events(&self) -> &[TransportEvent] {
        &self.events
    }

    pub fn destinations(&self) -> Vec<(ResolverAddress, u16)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TransportEvent::SetDestination(addr, port) => Some((*addr, *port)),
                _ => None,
            })
            .collect()
    }

    pub fn sent_packets(&self) -> Vec<Vec<u8>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TransportEvent::Send(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &TransportEvent) -> usize {
        self.events.iter().filter(|e| *e == wanted).count()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    fn current_script(&self) -> Option<&Script> {
        self.destination
            .as_ref()
            .and_then(|(addr, _)| self.scripts.get(addr))
    }

    fn server_label(&self) -> String {
        self.destination
            .map(|(addr, port)| addr.socket_addr(port).to_string())
            .unwrap_or_else(|| "<unset>".to_string())
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl DatagramTransport for MockTransport {
    fn set_destination(&mut self, address: ResolverAddress, port: u16) {
        self.events
            .push(TransportEvent::SetDestination(address, port));
        self.destination = Some((address, port));
    }

    fn open(&mut self) -> Result<(), DnsError> {
        self.events.push(TransportEvent::Open);
        if matches!(self.current_script(), Some(Script::FailOpen)) {
            return Err(DnsError::transport(self.server_label(), "open refused"));
        }
        self.is_open = true;
        Ok(())
    }

    fn send(&mut self, bytes: &[u8], _timeout: Duration) -> Result<usize, DnsError> {
        self.events.push(TransportEvent::Send(bytes.to_vec()));
        let unreachable = matches!(self.current_script(), None | Some(Script::FailSend));
        if unreachable {
            return Err(DnsError::transport(self.server_label(), "network unreachable"));
        }
        self.last_query = bytes.to_vec();
        Ok(bytes.len())
    }

    fn receive(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize, DnsError> {
        self.events.push(TransportEvent::Receive);
        let reply = match self.current_script().cloned() {
            Some(Script::Respond(bytes)) => bytes,
            Some(Script::AnswerA(octets)) => answer_for(&self.last_query, octets),
            Some(Script::EmptyReceive) => Vec::new(),
            _ => {
                return Err(DnsError::TransportTimeout {
                    server: self.server_label(),
                })
            }
        };
        let n = reply.len().min(buf.len());
        buf[..n].copy_from_slice(&reply[..n]);
        Ok(n)
    }

    fn close(&mut self) -> Result<(), DnsError> {
        self.events.push(TransportEvent::Close);
        self.is_open = false;
        if self.fail_close {
            return Err(DnsError::transport(self.server_label(), "close failed"));
        }
        Ok(())
    }
}

/// Builds a NOERROR response to `query` carrying one compressed A record.
pub fn answer_for(query: &[u8], octets: [u8; 4]) -> Vec<u8> {
    let mut response = Vec::with_capacity(query.len() + 16);
    response.extend_from_slice(&query[0..2]);
    response.extend_from_slice(&[0x81, 0x80]);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..]);
    response.extend_from_slice(&[
        0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x04,
    ]);
    response.extend_from_slice(&octets);
    response
}
