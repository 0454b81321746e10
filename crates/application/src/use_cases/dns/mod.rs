mod attempt;
mod query_id;
mod resolve_hostname;

pub use attempt::AttemptStage;
pub use query_id::{QueryIdPolicy, DEFAULT_QUERY_ID};
pub use resolve_hostname::ResolveHostnameUseCase;
