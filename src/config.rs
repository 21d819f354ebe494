use crate::amount::parse_amount;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Settings for the swap page
#[derive(Debug, Clone, PartialEq)]
pub struct SwapConfig {
    /// JSON-RPC endpoint used for the base currency balance
    pub rpc_url: String,
    /// Account whose balance is shown. None falls back to `fixed_base_balance`
    pub account: Option<String>,
    /// Base balance used when no account is configured
    pub fixed_base_balance: String,
    pub base_symbol: String,
    pub token_symbol: String,
    pub token_decimals: u32,
    /// Token balance handed to the swap form, in smallest units
    pub token_balance: u128,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            account: None,
            fixed_base_balance: "0".to_string(),
            base_symbol: "ETH".to_string(),
            token_symbol: "UMB".to_string(),
            token_decimals: 18,
            token_balance: 0,
        }
    }
}

impl SwapConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup. Missing or malformed values
    /// keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            rpc_url: non_empty("SWAP_RPC_URL").unwrap_or(defaults.rpc_url),
            account: non_empty("SWAP_ACCOUNT"),
            fixed_base_balance: non_empty("SWAP_FIXED_BASE_BALANCE")
                .filter(|v| parse_amount(v).is_ok())
                .unwrap_or(defaults.fixed_base_balance),
            base_symbol: non_empty("SWAP_BASE_SYMBOL").unwrap_or(defaults.base_symbol),
            token_symbol: non_empty("SWAP_TOKEN_SYMBOL").unwrap_or(defaults.token_symbol),
            token_decimals: non_empty("SWAP_TOKEN_DECIMALS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_decimals),
            token_balance: non_empty("SWAP_TOKEN_BALANCE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_balance),
        }
    }

    /// Check whether balances come from a real account
    pub fn is_live(&self) -> bool {
        self.account.is_some()
    }
}
