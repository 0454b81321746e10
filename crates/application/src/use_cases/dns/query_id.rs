/// Transaction ID used when none is configured.
pub const DEFAULT_QUERY_ID: u16 = 1;

/// How the transaction ID of each query is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryIdPolicy {
    /// Every query carries this ID.
    Fixed(u16),
    /// A fresh random ID per attempt, so a reply has to echo it to be accepted.
    Random,
}

impl QueryIdPolicy {
    pub fn from_randomize_flag(randomize: bool) -> Self {
        if randomize {
            QueryIdPolicy::Random
        } else {
            QueryIdPolicy::Fixed(DEFAULT_QUERY_ID)
        }
    }

    pub fn next_id(&self) -> u16 {
        match self {
            QueryIdPolicy::Fixed(id) => *id,
            QueryIdPolicy::Random => fastrand::u16(..),
        }
    }
}

impl Default for QueryIdPolicy {
    fn default() -> Self {
        QueryIdPolicy::Fixed(DEFAULT_QUERY_ID)
    }
}
