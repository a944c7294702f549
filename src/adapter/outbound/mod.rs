//! Outbound adapters (driven side).

pub mod relayer;
