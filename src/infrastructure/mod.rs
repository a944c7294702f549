//! Infrastructure layer.
//!
//! Technical concerns that turn command-line input into a ready-to-use
//! execution context. Nothing here renders output.
//!
//! # Submodules
//!
//! - [`config`] - Persisted configuration, precedence, and logging
//! - [`context`] - Execution context assembly
//! - [`wallet`] - Wallet secret loading and validation

pub mod config;
pub mod context;
pub mod wallet;

pub use context::{ContextArgs, ContextAssembler, ExecutionContext};
