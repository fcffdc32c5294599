//! Wire-level models: typed access to untyped JSON, envelopes and decoders.

pub mod config;
pub mod envelope;
pub mod errors;
pub mod prospect;
pub mod search;
pub mod wire;
