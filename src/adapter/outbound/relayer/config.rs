//! Configuration handle passed to relayer operations.

use std::fmt;
use std::sync::Arc;

use crate::domain::{ChainId, ChainProfile, TokenMap, WalletSecrets};
use crate::port::MessageSigner;

use super::signer::ReadOnlySigner;

/// Public key reported for read-only sessions. No key is ever held.
pub const READ_ONLY_PUBLIC_KEY: &str = "0x";

/// Everything a relayer client needs to talk to one chain on behalf of one
/// wallet.
///
/// Built once per invocation and shared by reference. Callers treat it as
/// opaque and only hand it to [`super::RelayerClient`].
#[derive(Clone)]
pub struct SdkConfig {
    pub chain: ChainId,
    pub relayer_url: String,
    pub websocket_url: String,
    pub dark_pool_address: String,
    pub wallet_id: String,
    pub(crate) symmetric_key: String,
    pub public_key: &'static str,
    pub signer: Arc<dyn MessageSigner>,
    pub tokens: Arc<TokenMap>,
}

impl SdkConfig {
    /// Build a read-only handle from a chain profile and loaded secrets.
    #[must_use]
    pub fn read_only(profile: &ChainProfile, secrets: &WalletSecrets, tokens: TokenMap) -> Self {
        Self {
            chain: profile.chain,
            relayer_url: profile.http_url.to_string(),
            websocket_url: profile.websocket_url.to_string(),
            dark_pool_address: profile.dark_pool_address.to_string(),
            wallet_id: secrets.wallet_id.clone(),
            symmetric_key: secrets.symmetric_key.clone(),
            public_key: READ_ONLY_PUBLIC_KEY,
            signer: Arc::new(ReadOnlySigner),
            tokens: Arc::new(tokens),
        }
    }

    /// Point the handle at a different relayer, e.g. a local test server.
    #[must_use]
    pub fn with_relayer_url(mut self, url: impl Into<String>) -> Self {
        self.relayer_url = url.into();
        self
    }
}

impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfig")
            .field("chain", &self.chain)
            .field("relayer_url", &self.relayer_url)
            .field("websocket_url", &self.websocket_url)
            .field("dark_pool_address", &self.dark_pool_address)
            .field("wallet_id", &self.wallet_id)
            .field("public_key", &self.public_key)
            .field("tokens", &self.tokens.len())
            .finish_non_exhaustive()
    }
}
