//! Per-invocation execution context assembly.
//!
//! Assembly is a linear pipeline: resolve the chain profile, then load the
//! wallet secrets and the token mapping concurrently, then build the SDK
//! handle. Any failure aborts the whole assembly; no partial context is ever
//! returned.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use super::config::ResolvedSettings;
use super::wallet;
use crate::adapter::outbound::relayer::{HttpTokenMappingSource, SdkConfig};
use crate::domain::{chain, ChainId, WalletSecrets};
use crate::error::Result;
use crate::port::TokenMappingSource;

/// Inputs to context assembly, already resolved through precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextArgs {
    pub chain_id: u64,
    pub wallet_path: PathBuf,
}

impl From<&ResolvedSettings> for ContextArgs {
    fn from(settings: &ResolvedSettings) -> Self {
        Self {
            chain_id: settings.chain_id.value,
            wallet_path: settings.wallet_path.value.clone(),
        }
    }
}

/// Fully resolved, immutable context consumed by every read command.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    chain: ChainId,
    http_url: &'static str,
    websocket_url: &'static str,
    dark_pool_address: &'static str,
    secrets: WalletSecrets,
    sdk_config: SdkConfig,
}

impl ExecutionContext {
    #[must_use]
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    #[must_use]
    pub fn chain_id(&self) -> u64 {
        self.chain.id()
    }

    #[must_use]
    pub fn http_url(&self) -> &str {
        self.http_url
    }

    #[must_use]
    pub fn websocket_url(&self) -> &str {
        self.websocket_url
    }

    #[must_use]
    pub fn dark_pool_address(&self) -> &str {
        self.dark_pool_address
    }

    #[must_use]
    pub fn secrets(&self) -> &WalletSecrets {
        &self.secrets
    }

    #[must_use]
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }
}

/// Builds [`ExecutionContext`]s.
#[derive(Clone)]
pub struct ContextAssembler {
    tokens: Arc<dyn TokenMappingSource>,
}

impl ContextAssembler {
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenMappingSource>) -> Self {
        Self { tokens }
    }

    /// Assemble a context for `args`.
    ///
    /// An unsupported chain fails before any file or network I/O. Secret
    /// loading and token mapping initialization run concurrently; the first
    /// failure is returned and the other branch is dropped.
    pub async fn create_context(&self, args: &ContextArgs) -> Result<ExecutionContext> {
        let profile = chain::resolve(args.chain_id)?;
        debug!(chain = %profile.chain, "Resolved chain profile");

        let (secrets, tokens) = tokio::try_join!(
            wallet::load(&args.wallet_path),
            self.tokens.load(profile.token_mapping_url),
        )?;

        let sdk_config = SdkConfig::read_only(profile, &secrets, tokens);
        info!(
            chain = %profile.chain,
            wallet_id = %secrets.wallet_id,
            wallet_path = %args.wallet_path.display(),
            tokens = sdk_config.tokens.len(),
            "Assembled execution context"
        );

        Ok(ExecutionContext {
            chain: profile.chain,
            http_url: profile.http_url,
            websocket_url: profile.websocket_url,
            dark_pool_address: profile.dark_pool_address,
            secrets,
            sdk_config,
        })
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(Arc::new(HttpTokenMappingSource::new()))
    }
}
