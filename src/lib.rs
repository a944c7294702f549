//! Renegade CLI - read-only inspection of Renegade dark pool wallets.
//!
//! # Architecture
//!
//! - **`domain`** - Chain profiles, wallet secrets, tokens, and relayer read models
//! - **`port`** - Seams for token mapping sources and message signing
//! - **`infrastructure`** - Configuration store, precedence, logging, secret
//!   loading, and execution context assembly
//! - **`adapter::outbound::relayer`** - Authenticated relayer HTTP client and
//!   the read-only SDK handle
//! - **`adapter::inbound::cli`** - Command parsing, handlers, and terminal output
//!
//! # Example
//!
//! ```no_run
//! use renegade_cli::infrastructure::{ContextArgs, ContextAssembler};
//!
//! # async fn demo() -> renegade_cli::error::Result<()> {
//! let args = ContextArgs {
//!     chain_id: 42161,
//!     wallet_path: "wallet.json".into(),
//! };
//! let ctx = ContextAssembler::default().create_context(&args).await?;
//! println!("relayer at {}", ctx.http_url());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

/// Name of the installed binary, used in hints and suggestions.
pub const BINARY_NAME: &str = "renegade";
