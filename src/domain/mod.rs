//! Domain records exposed by the prospecting client.

pub mod channel;
pub mod criteria;
pub mod prospect;
pub mod quick_search;
pub mod search;
pub mod types;
