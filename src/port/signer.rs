//! Message signing port.

use crate::error::Result;

/// Signs relayer messages on behalf of the wallet owner.
pub trait MessageSigner: Send + Sync {
    /// Sign `message`, returning a 0x-prefixed signature.
    fn sign_message(&self, message: &[u8]) -> Result<String>;
}
