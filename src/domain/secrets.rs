//! Wallet secret material.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields every wallet secrets file must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "wallet_id",
    "blinder_seed",
    "share_seed",
    "symmetric_key",
    "sk_match",
];

/// Cryptographic material identifying a read-only relayer account.
///
/// Unknown fields in the secrets file are kept in `extra` and passed through
/// untouched.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSecrets {
    pub wallet_id: String,
    pub blinder_seed: String,
    pub share_seed: String,
    pub symmetric_key: String,
    pub sk_match: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Seeds and keys never reach logs.
impl fmt::Debug for WalletSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSecrets")
            .field("wallet_id", &self.wallet_id)
            .field("blinder_seed", &"<redacted>")
            .field("share_seed", &"<redacted>")
            .field("symmetric_key", &"<redacted>")
            .field("sk_match", &"<redacted>")
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}
