pub mod mock_transport;

pub use mock_transport::{answer_for, MockTransport, Script, TransportEvent};
