pub mod builder;

pub use builder::StubResolverBuilder;
