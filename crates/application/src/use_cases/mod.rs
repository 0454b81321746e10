pub mod dns;

pub use dns::{AttemptStage, QueryIdPolicy, ResolveHostnameUseCase};
