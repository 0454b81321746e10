//! Ferrous Stub Infrastructure Layer
pub mod dns;
pub mod logging;

pub use dns::{StubResolverBuilder, UdpTransport};
pub use logging::init_logging;
