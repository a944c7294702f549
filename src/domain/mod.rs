//! Core domain types.
//!
//! Nothing in this module performs I/O.
//!
//! - [`chain`] - Supported chains and their network profiles
//! - [`secrets`] - Wallet secret material
//! - [`token`] - Token metadata and unit formatting
//! - [`wallet`] - Wallet, order, and task read models

pub mod chain;
pub mod secrets;
pub mod token;
pub mod wallet;

pub use chain::{ChainId, ChainProfile};
pub use secrets::WalletSecrets;
pub use token::{Token, TokenMap};
