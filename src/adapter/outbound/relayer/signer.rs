//! Signing stub for read-only sessions.

use crate::error::{Error, Result};
use crate::port::MessageSigner;

/// Signer that refuses every request.
///
/// The CLI never submits writes to the relayer, so any attempt to sign is a
/// programming error surfaced as an SDK failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnlySigner;

impl MessageSigner for ReadOnlySigner {
    fn sign_message(&self, _message: &[u8]) -> Result<String> {
        Err(Error::sdk(
            "signing is not supported: this CLI only performs read operations",
        ))
    }
}
