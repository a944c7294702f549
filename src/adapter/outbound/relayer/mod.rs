//! Relayer SDK boundary.
//!
//! The rest of the crate only sees [`SdkConfig`] and [`RelayerClient`].
//! Authentication, wire shapes, and token mapping retrieval stay here.

pub mod auth;
mod client;
mod config;
mod signer;
mod token;

pub use client::RelayerClient;
pub use config::{SdkConfig, READ_ONLY_PUBLIC_KEY};
pub use signer::ReadOnlySigner;
pub use token::HttpTokenMappingSource;
