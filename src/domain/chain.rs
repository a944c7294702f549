//! Supported chains and their fixed network profiles.
//!
//! Resolution is a pure table lookup. Unsupported chain IDs have no profile
//! and fail closed with [`Error::ChainConfig`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Chains the relayer is deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    ArbitrumOne,
    ArbitrumSepolia,
}

impl ChainId {
    /// Every supported chain, mainnet first.
    pub const ALL: [ChainId; 2] = [ChainId::ArbitrumOne, ChainId::ArbitrumSepolia];

    /// Numeric EVM chain ID.
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::ArbitrumOne => 42161,
            Self::ArbitrumSepolia => 421614,
        }
    }

    /// Human-readable network name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArbitrumOne => "Arbitrum One",
            Self::ArbitrumSepolia => "Arbitrum Sepolia",
        }
    }

    /// The network profile for this chain.
    #[must_use]
    pub const fn profile(self) -> &'static ChainProfile {
        match self {
            Self::ArbitrumOne => &ARBITRUM_ONE,
            Self::ArbitrumSepolia => &ARBITRUM_SEPOLIA,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

impl TryFrom<u64> for ChainId {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        ChainId::ALL
            .into_iter()
            .find(|chain| chain.id() == value)
            .ok_or_else(|| Error::ChainConfig {
                chain_id: value,
                supported: supported_chains(),
            })
    }
}

/// Immutable endpoints and contract address for one chain.
#[derive(Debug, PartialEq, Eq)]
pub struct ChainProfile {
    pub chain: ChainId,
    pub http_url: &'static str,
    pub websocket_url: &'static str,
    /// 0x-prefixed dark pool contract address.
    pub dark_pool_address: &'static str,
    pub token_mapping_url: &'static str,
}

pub static ARBITRUM_ONE: ChainProfile = ChainProfile {
    chain: ChainId::ArbitrumOne,
    http_url: "https://mainnet.cluster0.renegade.fi:3000",
    websocket_url: "wss://mainnet.cluster0.renegade.fi:4000",
    dark_pool_address: "0x30bd8eab29181f790d7e495786d4b96d7afdc518",
    token_mapping_url:
        "https://raw.githubusercontent.com/renegade-fi/token-mappings/main/arbitrum-one.json",
};

pub static ARBITRUM_SEPOLIA: ChainProfile = ChainProfile {
    chain: ChainId::ArbitrumSepolia,
    http_url: "https://testnet.cluster0.renegade.fi:3000",
    websocket_url: "wss://testnet.cluster0.renegade.fi:4000",
    dark_pool_address: "0x9af58f1ff20ab22e819e40b57ffd784d115a9ef5",
    token_mapping_url:
        "https://raw.githubusercontent.com/renegade-fi/token-mappings/main/arbitrum-sepolia.json",
};

/// Resolve a raw chain ID into its network profile.
pub fn resolve(chain_id: u64) -> Result<&'static ChainProfile> {
    ChainId::try_from(chain_id).map(ChainId::profile)
}

/// `42161 (Arbitrum One), 421614 (Arbitrum Sepolia)`
fn supported_chains() -> String {
    ChainId::ALL
        .iter()
        .map(|chain| format!("{} ({})", chain.id(), chain.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_resolve_supported_chains() {
        for id in [42161, 421614] {
            let profile = resolve(id).unwrap();
            assert_eq!(profile.chain.id(), id);
            assert!(!profile.http_url.is_empty());
            assert!(!profile.websocket_url.is_empty());
            assert!(!profile.token_mapping_url.is_empty());
            assert!(profile.dark_pool_address.starts_with("0x"));
            assert_eq!(profile.dark_pool_address.len(), 42);
        }
    }

    #[test]
    fn test_profiles_point_at_matching_cluster() {
        assert!(ARBITRUM_ONE.http_url.starts_with("https://mainnet."));
        assert!(ARBITRUM_ONE.http_url.ends_with(":3000"));
        assert!(ARBITRUM_ONE.websocket_url.starts_with("wss://mainnet."));
        assert!(ARBITRUM_ONE.websocket_url.ends_with(":4000"));
        assert!(ARBITRUM_SEPOLIA.http_url.starts_with("https://testnet."));
        assert!(ARBITRUM_SEPOLIA.websocket_url.starts_with("wss://testnet."));
        assert_ne!(
            ARBITRUM_ONE.dark_pool_address,
            ARBITRUM_SEPOLIA.dark_pool_address
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = resolve(42161).unwrap();
        let second = resolve(42161).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_resolve_unsupported_lists_supported_ids() {
        for id in [0, 1, 137, 42162, u64::MAX] {
            let err = resolve(id).unwrap_err();
            assert_eq!(err.code(), ErrorCode::ChainConfig);
            let message = err.to_string();
            assert!(message.contains(&id.to_string()));
            assert!(message.contains("42161"));
            assert!(message.contains("421614"));
            assert!(message.contains("Arbitrum One"));
            assert!(message.contains("Arbitrum Sepolia"));
        }
    }

    #[test]
    fn test_chain_id_serializes_as_number() {
        let json = serde_json::to_string(&ChainId::ArbitrumSepolia).unwrap();
        assert_eq!(json, "421614");
        let parsed: ChainId = serde_json::from_str("42161").unwrap();
        assert_eq!(parsed, ChainId::ArbitrumOne);
        assert!(serde_json::from_str::<ChainId>("1").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ChainId::ArbitrumOne.to_string(), "Arbitrum One (42161)");
    }
}
