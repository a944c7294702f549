//! Authenticated read-only relayer HTTP client.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::auth::HmacKey;
use super::config::SdkConfig;
use crate::domain::wallet::{HistoricalOrder, Task, Wallet};
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct WalletResponse {
    wallet: Wallet,
}

#[derive(Debug, Deserialize)]
struct OrderHistoryResponse {
    #[serde(default)]
    orders: Vec<HistoricalOrder>,
}

#[derive(Debug, Deserialize)]
struct TaskHistoryResponse {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Client for the wallet read endpoints of a relayer.
pub struct RelayerClient {
    http: HttpClient,
    base_url: String,
    wallet_id: String,
    key: HmacKey,
}

impl RelayerClient {
    /// Build a client from an assembled SDK handle.
    ///
    /// Fails if the wallet's symmetric key cannot be decoded.
    pub fn new(config: &SdkConfig) -> Result<Self> {
        let key = HmacKey::from_hex(&config.symmetric_key)?;
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::sdk_with("failed to build HTTP client", e))?;

        Ok(Self {
            http,
            base_url: config.relayer_url.trim_end_matches('/').to_string(),
            wallet_id: config.wallet_id.clone(),
            key,
        })
    }

    /// Wallet state after every queued task has been applied.
    ///
    /// With `filter_defaults`, empty order and balance slots are dropped.
    pub async fn back_of_queue_wallet(&self, filter_defaults: bool) -> Result<Wallet> {
        let path = format!("/v0/wallet/{}/back-of-queue", self.wallet_id);
        let response: WalletResponse = self.get(&path).await?;
        if filter_defaults {
            Ok(response.wallet.without_defaults())
        } else {
            Ok(response.wallet)
        }
    }

    /// Most recent orders first, at most `limit`.
    pub async fn order_history(&self, limit: usize) -> Result<Vec<HistoricalOrder>> {
        let path = format!("/v0/wallet/{}/order-history", self.wallet_id);
        let response: OrderHistoryResponse = self.get(&path).await?;
        let mut orders = response.orders;
        orders.sort_by(|a, b| b.created.cmp(&a.created));
        orders.truncate(limit);
        Ok(orders)
    }

    /// Most recent tasks first, at most `limit`.
    pub async fn task_history(&self, limit: usize) -> Result<Vec<Task>> {
        let path = format!("/v0/wallet/{}/task-history", self.wallet_id);
        let response: TaskHistoryResponse = self.get(&path).await?;
        let mut tasks = response.tasks;
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tasks.truncate(limit);
        Ok(tasks)
    }

    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let mut request = self.http.get(format!("{}{path}", self.base_url));
        for (name, value) in self.key.auth_headers(path, b"", now_ms)? {
            request = request.header(name, value);
        }

        debug!(path, "Relayer request");
        let response = request
            .send()
            .await
            .map_err(|e| Error::sdk_with(format!("request to {path} failed"), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::sdk(format!(
                "relayer returned {status} for {path}: {}",
                body.trim()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::sdk_with(format!("unexpected response from {path}"), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::relayer::auth::{AUTH_HEADER, EXPIRATION_HEADER};
    use crate::domain::{chain, TokenMap, WalletSecrets};
    use crate::error::ErrorCode;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "0x0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20";

    fn sdk_config(relayer_url: &str, symmetric_key: &str) -> SdkConfig {
        let secrets = WalletSecrets {
            wallet_id: "w1".to_string(),
            blinder_seed: "b".to_string(),
            share_seed: "s".to_string(),
            symmetric_key: symmetric_key.to_string(),
            sk_match: "m".to_string(),
            extra: serde_json::Map::new(),
        };
        SdkConfig::read_only(chain::resolve(42161).unwrap(), &secrets, TokenMap::default())
            .with_relayer_url(relayer_url)
    }

    fn wallet_body() -> serde_json::Value {
        json!({
            "wallet": {
                "id": "w1",
                "orders": [
                    {"id": "o1", "base_mint": "0xb", "quote_mint": "0xq", "side": "Buy", "amount": 0},
                    {"id": "o2", "base_mint": "0xb", "quote_mint": "0xq", "side": "Sell", "amount": 25}
                ],
                "balances": [
                    {"mint": "0xb", "amount": 0, "relayer_fee_balance": 0, "protocol_fee_balance": 0},
                    {"mint": "0xq", "amount": 7, "relayer_fee_balance": 1, "protocol_fee_balance": 0}
                ]
            }
        })
    }

    #[tokio::test]
    async fn test_back_of_queue_wallet_is_authenticated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0/wallet/w1/back-of-queue"))
            .and(header_exists(AUTH_HEADER))
            .and(header_exists(EXPIRATION_HEADER))
            .respond_with(ResponseTemplate::new(200).set_body_json(wallet_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RelayerClient::new(&sdk_config(&mock_server.uri(), KEY)).unwrap();
        let wallet = client.back_of_queue_wallet(true).await.unwrap();

        assert_eq!(wallet.id, "w1");
        assert_eq!(wallet.orders.len(), 1);
        assert_eq!(wallet.orders[0].id, "o2");
        assert_eq!(wallet.balances.len(), 1);
    }

    #[tokio::test]
    async fn test_back_of_queue_wallet_unfiltered_keeps_defaults() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0/wallet/w1/back-of-queue"))
            .respond_with(ResponseTemplate::new(200).set_body_json(wallet_body()))
            .mount(&mock_server)
            .await;

        let client = RelayerClient::new(&sdk_config(&mock_server.uri(), KEY)).unwrap();
        let wallet = client.back_of_queue_wallet(false).await.unwrap();

        assert_eq!(wallet.orders.len(), 2);
        assert_eq!(wallet.balances.len(), 2);
    }

    #[tokio::test]
    async fn test_order_history_newest_first_and_limited() {
        let mock_server = MockServer::start().await;

        let order = |id: &str, created: u64| {
            json!({
                "id": id,
                "state": "Filled",
                "fills": [{"amount": 5}],
                "created": created,
                "data": {"id": id, "base_mint": "0xb", "quote_mint": "0xq", "side": "Buy", "amount": 10}
            })
        };
        Mock::given(method("GET"))
            .and(path("/v0/wallet/w1/order-history"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "orders": [order("old", 1), order("new", 3), order("mid", 2)]
            })))
            .mount(&mock_server)
            .await;

        let client = RelayerClient::new(&sdk_config(&mock_server.uri(), KEY)).unwrap();
        let orders = client.order_history(2).await.unwrap();

        let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid"]);
        assert!((orders[0].fill_percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_task_history_limit() {
        let mock_server = MockServer::start().await;

        let task = |id: &str, created_at: u64| {
            json!({
                "id": id,
                "state": "Completed",
                "created_at": created_at,
                "task_info": {"task_type": "UpdateWallet", "update_type": "Deposit"}
            })
        };
        Mock::given(method("GET"))
            .and(path("/v0/wallet/w1/task-history"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tasks": [task("t1", 10), task("t2", 20)]
            })))
            .mount(&mock_server)
            .await;

        let client = RelayerClient::new(&sdk_config(&mock_server.uri(), KEY)).unwrap();
        let tasks = client.task_history(1).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "t2");
    }

    #[tokio::test]
    async fn test_relayer_error_status_is_sdk_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid signature"))
            .mount(&mock_server)
            .await;

        let client = RelayerClient::new(&sdk_config(&mock_server.uri(), KEY)).unwrap();
        let err = client.task_history(10).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::Sdk);
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid signature"));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_sdk_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nope": true})))
            .mount(&mock_server)
            .await;

        let client = RelayerClient::new(&sdk_config(&mock_server.uri(), KEY)).unwrap();
        let err = client.back_of_queue_wallet(true).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Sdk);
    }

    #[test]
    fn test_undecodable_key_is_sdk_error() {
        let err = RelayerClient::new(&sdk_config("http://127.0.0.1:1", "k"))
            .err()
            .unwrap();
        assert_eq!(err.code(), ErrorCode::Sdk);
    }
}
