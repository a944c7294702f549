//! Ordered fallback for per-invocation settings.
//!
//! An explicit command-line value wins over the persisted configuration,
//! which wins over the built-in default.

use std::fmt;
use std::path::PathBuf;

use super::paths;
use super::store::PersistedConfig;
use crate::domain::ChainId;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Explicit,
    Persisted,
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => f.write_str("argument"),
            Self::Persisted => f.write_str("config file"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// A value together with the tier that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layered<T> {
    pub value: T,
    pub source: Source,
}

/// Pick the first present value: explicit, then persisted, then default.
pub fn resolve<T>(
    explicit: Option<T>,
    persisted: Option<T>,
    default: impl FnOnce() -> T,
) -> Layered<T> {
    if let Some(value) = explicit {
        return Layered {
            value,
            source: Source::Explicit,
        };
    }
    if let Some(value) = persisted {
        return Layered {
            value,
            source: Source::Persisted,
        };
    }
    Layered {
        value: default(),
        source: Source::Default,
    }
}

/// Chain ID used when neither an argument nor the config names one.
pub const DEFAULT_CHAIN: ChainId = ChainId::ArbitrumOne;

/// Settings every command resolves before assembling its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Raw chain ID; validated later by chain resolution.
    pub chain_id: Layered<u64>,
    pub wallet_path: Layered<PathBuf>,
}

impl ResolvedSettings {
    /// Apply the three-tier precedence to the command-line overrides.
    #[must_use]
    pub fn resolve(
        chain_id: Option<u64>,
        wallet_path: Option<PathBuf>,
        persisted: Option<&PersistedConfig>,
    ) -> Self {
        Self {
            chain_id: resolve(
                chain_id,
                persisted.map(|c| c.chain_id.id()),
                || DEFAULT_CHAIN.id(),
            ),
            wallet_path: resolve(
                wallet_path,
                persisted.map(|c| c.wallet_path.clone()),
                paths::default_wallet_path,
            ),
        }
    }
}
