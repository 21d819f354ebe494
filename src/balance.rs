use crate::amount::{from_smallest_units, parse_amount, parse_hex_quantity, BASE_DECIMALS};
use crate::config::SwapConfig;
use crate::error::SwapError;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Where the swap form gets the user's base currency balance from
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait BalanceSource: Send + Sync {
    async fn base_balance(&self) -> Result<BigDecimal, SwapError>;
}

/// Always reports the same balance
#[derive(Debug, Clone)]
pub struct FixedBalanceSource {
    balance: BigDecimal,
}

impl FixedBalanceSource {
    pub fn new(balance: BigDecimal) -> Self {
        Self { balance }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl BalanceSource for FixedBalanceSource {
    async fn base_balance(&self) -> Result<BigDecimal, SwapError> {
        Ok(self.balance.clone())
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest {
    jsonrpc: String,
    id: u64,
    method: String,
    params: Vec<Value>,
}

/// Looks the balance up with `eth_getBalance` on a JSON-RPC node
#[derive(Debug, Clone)]
pub struct RpcBalanceSource {
    client: Client,
    rpc_url: String,
    account: String,
}

impl RpcBalanceSource {
    pub fn new(rpc_url: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.into(),
            account: account.into(),
        }
    }

    fn balance_request(&self) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: 1,
            method: "eth_getBalance".to_string(),
            params: vec![
                Value::String(self.account.clone()),
                Value::String("latest".to_string()),
            ],
        }
    }

    async fn fetch_wei(&self) -> Result<u128, SwapError> {
        let response = self
            .client
            .post(&self.rpc_url)
            .header("Content-Type", "application/json")
            .json(&self.balance_request())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SwapError::Balance(format!("RPC error: {}", response.status())));
        }

        let json: Value = response.json().await?;
        parse_balance_response(&json).map_err(SwapError::Balance)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl BalanceSource for RpcBalanceSource {
    async fn base_balance(&self) -> Result<BigDecimal, SwapError> {
        log::debug!("Fetching base balance of {} from {}", self.account, self.rpc_url);
        let wei = self.fetch_wei().await?;
        Ok(from_smallest_units(wei, BASE_DECIMALS))
    }
}

/// Extract the wei balance from a JSON-RPC response body
fn parse_balance_response(json: &Value) -> Result<u128, String> {
    if let Some(error) = json.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.to_string());
        return Err(format!("RPC error: {}", message));
    }

    match json.get("result").and_then(|r| r.as_str()) {
        Some(hex) => parse_hex_quantity(hex),
        None => Err(format!("Failed to parse balance from response: {}", json)),
    }
}

/// Turn a finished base balance lookup into the balance to show and the
/// message to display. A failed lookup leaves the balance at zero.
pub fn settle_base_balance(result: Result<BigDecimal, SwapError>) -> (BigDecimal, Option<String>) {
    match result {
        Ok(balance) => (balance, None),
        Err(e) => {
            log::error!("Failed to load base balance: {}", e);
            (BigDecimal::zero(), Some(e.to_string()))
        }
    }
}

/// Pick the balance source for a configuration
pub fn source_from_config(config: &SwapConfig) -> Arc<dyn BalanceSource> {
    match &config.account {
        Some(account) => {
            log::info!("Reading base balance of {} from {}", account, config.rpc_url);
            Arc::new(RpcBalanceSource::new(config.rpc_url.clone(), account.clone()))
        }
        None => {
            let balance = parse_amount(&config.fixed_base_balance).unwrap_or_else(|e| {
                log::warn!("Ignoring fixed base balance: {}", e);
                BigDecimal::zero()
            });
            log::info!("No account configured, using fixed base balance {}", config.fixed_base_balance);
            Arc::new(FixedBalanceSource::new(balance))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_balance_response() {
        let body = json!({ "jsonrpc": "2.0", "id": 1, "result": "0x14d1120d7b160000" });
        assert_eq!(parse_balance_response(&body).unwrap(), 1_500_000_000_000_000_000);
    }

    #[test]
    fn test_parse_rpc_error() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "invalid address" }
        });
        let err = parse_balance_response(&body).unwrap_err();
        assert!(err.contains("invalid address"));
    }

    #[test]
    fn test_parse_missing_result() {
        let body = json!({ "jsonrpc": "2.0", "id": 1 });
        assert!(parse_balance_response(&body).is_err());
    }

    #[test]
    fn test_balance_request_shape() {
        let source = RpcBalanceSource::new("http://localhost:8545", "0xabc");
        let request = serde_json::to_value(source.balance_request()).unwrap();
        assert_eq!(request["method"], "eth_getBalance");
        assert_eq!(request["params"], json!(["0xabc", "latest"]));
    }

    #[test]
    fn test_settle_successful_lookup() {
        let (balance, error) = settle_base_balance(Ok(parse_amount("1.5").unwrap()));
        assert_eq!(balance, parse_amount("1.5").unwrap());
        assert!(error.is_none());
    }

    #[test]
    fn test_settle_failed_lookup_keeps_zero() {
        let (balance, error) =
            settle_base_balance(Err(SwapError::Balance("RPC error: 503".to_string())));
        assert!(balance.is_zero());
        assert_eq!(error.unwrap(), "Balance unavailable: RPC error: 503");
    }

    #[tokio::test]
    async fn test_fixed_source_from_config() {
        let config = SwapConfig {
            fixed_base_balance: "1.5".to_string(),
            ..SwapConfig::default()
        };
        let source = source_from_config(&config);
        let balance = source.base_balance().await.unwrap();
        assert_eq!(balance, parse_amount("1.5").unwrap());
    }
}
