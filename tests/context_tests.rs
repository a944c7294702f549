//! End-to-end flow through the library API: saved configuration, context
//! assembly, and an authenticated relayer read against a mock server.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use renegade_cli::adapter::outbound::relayer::RelayerClient;
use renegade_cli::domain::{ChainId, Token, TokenMap};
use renegade_cli::error::{ErrorCode, Result};
use renegade_cli::infrastructure::config::{
    ConfigStore, PersistedConfig, ResolvedSettings, Source,
};
use renegade_cli::infrastructure::{ContextArgs, ContextAssembler};
use renegade_cli::port::TokenMappingSource;

struct FixedTokens;

#[async_trait]
impl TokenMappingSource for FixedTokens {
    async fn load(&self, _url: &str) -> Result<TokenMap> {
        Ok(TokenMap::new(vec![Token {
            name: "USD Coin".to_string(),
            ticker: "USDC".to_string(),
            address: "0xusdc".to_string(),
            decimals: 6,
        }]))
    }
}

fn write_wallet(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("wallet.json");
    let secrets = json!({
        "wallet_id": "2f0c1a7e-0000-4000-8000-000000000001",
        "blinder_seed": "0x01",
        "share_seed": "0x02",
        "symmetric_key": "0x00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
        "sk_match": "0x03",
    });
    std::fs::write(&path, secrets.to_string()).unwrap();
    path
}

#[tokio::test]
async fn test_saved_config_drives_relayer_reads() {
    let dir = TempDir::new().unwrap();
    let wallet_path = write_wallet(&dir);

    let store = ConfigStore::new(dir.path().join("home").join("config.json"));
    assert!(!store.would_overwrite());
    store
        .write(&PersistedConfig {
            wallet_path: wallet_path.clone(),
            chain_id: ChainId::ArbitrumSepolia,
        })
        .unwrap();
    assert!(store.would_overwrite());

    let persisted = store.read().unwrap();
    let settings = ResolvedSettings::resolve(None, None, persisted.as_ref());
    assert_eq!(settings.chain_id.value, 421614);
    assert_eq!(settings.chain_id.source, Source::Persisted);
    assert_eq!(settings.wallet_path.value, wallet_path);

    let assembler = ContextAssembler::new(Arc::new(FixedTokens));
    let ctx = assembler
        .create_context(&ContextArgs::from(&settings))
        .await
        .unwrap();
    assert_eq!(ctx.chain(), ChainId::ArbitrumSepolia);
    assert_eq!(ctx.sdk_config().tokens.ticker("0xusdc"), "USDC");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/v0/wallet/2f0c1a7e-0000-4000-8000-000000000001/back-of-queue",
        ))
        .and(header_exists("x-renegade-auth"))
        .and(header_exists("x-renegade-auth-expiration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "wallet": {
                "id": "2f0c1a7e-0000-4000-8000-000000000001",
                "orders": [],
                "balances": [
                    {"mint": "0xusdc", "amount": 5000000, "relayer_fee_balance": 0, "protocol_fee_balance": 0},
                    {"mint": "0x0", "amount": 0, "relayer_fee_balance": 0, "protocol_fee_balance": 0}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = ctx.sdk_config().clone().with_relayer_url(server.uri());
    let client = RelayerClient::new(&sdk).unwrap();
    let wallet = client.back_of_queue_wallet(true).await.unwrap();

    assert_eq!(wallet.balances.len(), 1);
    assert_eq!(
        sdk.tokens.format_amount(&wallet.balances[0].mint, wallet.balances[0].amount),
        "5"
    );
}

#[tokio::test]
async fn test_explicit_override_beats_saved_chain() {
    let dir = TempDir::new().unwrap();
    let wallet_path = write_wallet(&dir);
    let store = ConfigStore::new(dir.path().join("config.json"));
    store
        .write(&PersistedConfig {
            wallet_path,
            chain_id: ChainId::ArbitrumSepolia,
        })
        .unwrap();

    let persisted = store.read().unwrap();
    let settings = ResolvedSettings::resolve(Some(1), None, persisted.as_ref());
    assert_eq!(settings.chain_id.source, Source::Explicit);

    let err = ContextAssembler::new(Arc::new(FixedTokens))
        .create_context(&ContextArgs::from(&settings))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ChainConfig);
}

#[tokio::test]
async fn test_signing_is_refused() {
    let dir = TempDir::new().unwrap();
    let ctx = ContextAssembler::new(Arc::new(FixedTokens))
        .create_context(&ContextArgs {
            chain_id: 42161,
            wallet_path: write_wallet(&dir),
        })
        .await
        .unwrap();

    assert_eq!(ctx.sdk_config().public_key, "0x");
    let err = ctx.sdk_config().signer.sign_message(b"hello").unwrap_err();
    assert_eq!(err.code(), ErrorCode::Sdk);
}
