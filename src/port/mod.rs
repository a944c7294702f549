//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the command context subsystem and the
//! collaborators it drives.
//!
//! # Available Ports
//!
//! - [`TokenMappingSource`] - Loads a chain's token mapping from an explicit URL
//! - [`MessageSigner`] - Signing capability handed to the relayer SDK handle

mod signer;
mod token;

pub use signer::MessageSigner;
pub use token::TokenMappingSource;
