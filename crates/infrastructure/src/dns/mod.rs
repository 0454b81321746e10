pub mod resolver;
pub mod transport;

pub use resolver::StubResolverBuilder;
pub use transport::UdpTransport;
