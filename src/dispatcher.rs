// src/dispatcher.rs
use crate::amount::parse_positive_amount;
use crate::error::{SwapError, SwapStage};
use crate::swap::{SwapAction, Symbols};
use async_trait::async_trait;

/// Chain operations the host application injects into the swap form
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait SwapHandler: Send + Sync {
    /// Spend `amount` of the base currency on the token
    async fn buy(&self, amount: &str) -> Result<(), String>;

    /// Allow the token contract to take the user's tokens
    async fn approve(&self) -> Result<(), String>;

    /// Sell `amount` of the token for the base currency
    async fn sell(&self, amount: &str) -> Result<(), String>;
}

/// Result of a finished swap chain
#[derive(Debug, Clone, PartialEq)]
pub struct SwapOutcome {
    pub action: SwapAction,
    pub amount: String,
}

impl SwapOutcome {
    pub fn summary(&self, symbols: &Symbols) -> String {
        match self.action {
            SwapAction::Buy => format!("Bought {} with {} {}", symbols.token, self.amount, symbols.base),
            SwapAction::Sell => format!("Sold {} {}", self.amount, symbols.token),
        }
    }
}

/// Run the swap for `action`.
///
/// A buy is a single `buy` call. A sell awaits `approve` and only then
/// awaits `sell`; a rejected approve means `sell` is never called. The
/// outcome is returned once every step has finished.
pub async fn execute_swap(
    handler: &dyn SwapHandler,
    action: SwapAction,
    amount: &str,
) -> Result<SwapOutcome, SwapError> {
    parse_positive_amount(amount)?;

    match action {
        SwapAction::Buy => {
            log::info!("Buying with {}", amount);
            handler
                .buy(amount)
                .await
                .map_err(|e| SwapError::callback(SwapStage::Buy, e))?;

            Ok(SwapOutcome {
                action,
                amount: amount.to_string(),
            })
        }
        SwapAction::Sell => {
            log::info!("Approving sale of {}", amount);
            handler
                .approve()
                .await
                .map_err(|e| SwapError::callback(SwapStage::Approve, e))?;

            log::info!("Selling {}", amount);
            handler
                .sell(amount)
                .await
                .map_err(|e| SwapError::callback(SwapStage::Sell, e))?;

            Ok(SwapOutcome {
                action,
                amount: amount.to_string(),
            })
        }
    }
}

/// Handler that only logs what it would send. Used by the demo host until a
/// wallet is connected.
#[derive(Debug, Clone, Default)]
pub struct LoggingSwapHandler {
    pub token_symbol: String,
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl SwapHandler for LoggingSwapHandler {
    async fn buy(&self, amount: &str) -> Result<(), String> {
        log::info!("Buying ${} with {}", self.token_symbol, amount);
        Ok(())
    }

    async fn approve(&self) -> Result<(), String> {
        log::info!("Approving ${}", self.token_symbol);
        Ok(())
    }

    async fn sell(&self, amount: &str) -> Result<(), String> {
        log::info!("Selling {} ${}", amount, self.token_symbol);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Records every call in order; individual steps can be made to fail
    #[derive(Default)]
    struct RecordingHandler {
        calls: Mutex<Vec<String>>,
        fail_approve: bool,
        fail_sell: bool,
    }

    impl RecordingHandler {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SwapHandler for RecordingHandler {
        async fn buy(&self, amount: &str) -> Result<(), String> {
            self.calls.lock().unwrap().push(format!("buy:{}", amount));
            Ok(())
        }

        async fn approve(&self) -> Result<(), String> {
            tokio::task::yield_now().await;
            self.calls.lock().unwrap().push("approve".to_string());
            if self.fail_approve {
                return Err("user rejected".to_string());
            }
            Ok(())
        }

        async fn sell(&self, amount: &str) -> Result<(), String> {
            self.calls.lock().unwrap().push(format!("sell:{}", amount));
            if self.fail_sell {
                return Err("reverted".to_string());
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_buy_calls_buy_once() {
        let handler = RecordingHandler::default();
        let outcome = execute_swap(&handler, SwapAction::Buy, "1").await.unwrap();

        assert_eq!(handler.calls(), vec!["buy:1"]);
        assert_eq!(outcome.action, SwapAction::Buy);
    }

    #[tokio::test]
    async fn test_sell_approves_first() {
        let handler = RecordingHandler::default();
        let outcome = execute_swap(&handler, SwapAction::Sell, "16.224").await.unwrap();

        assert_eq!(handler.calls(), vec!["approve", "sell:16.224"]);
        assert_eq!(outcome.amount, "16.224");
        assert_eq!(outcome.action, SwapAction::Sell);
    }

    #[tokio::test]
    async fn test_rejected_approve_skips_sell() {
        let handler = RecordingHandler {
            fail_approve: true,
            ..Default::default()
        };
        let err = execute_swap(&handler, SwapAction::Sell, "5").await.unwrap_err();

        assert_eq!(handler.calls(), vec!["approve"]);
        assert_eq!(err, SwapError::callback(SwapStage::Approve, "user rejected"));
    }

    #[tokio::test]
    async fn test_failed_sell_is_reported() {
        let handler = RecordingHandler {
            fail_sell: true,
            ..Default::default()
        };
        let err = execute_swap(&handler, SwapAction::Sell, "5").await.unwrap_err();

        assert_eq!(handler.calls(), vec!["approve", "sell:5"]);
        assert!(matches!(err, SwapError::CallbackFailure { stage: SwapStage::Sell, .. }));
    }

    #[tokio::test]
    async fn test_invalid_amount_calls_nothing() {
        let handler = RecordingHandler::default();
        for amount in ["", "0", "-3", "ten"] {
            let result = execute_swap(&handler, SwapAction::Buy, amount).await;
            assert!(matches!(result, Err(SwapError::InvalidAmount(_))));
        }
        assert!(handler.calls().is_empty());
    }

    #[test]
    fn test_outcome_summary() {
        let symbols = Symbols::new("ETH", "UMB");
        let bought = SwapOutcome {
            action: SwapAction::Buy,
            amount: "1".to_string(),
        };
        assert_eq!(bought.summary(&symbols), "Bought UMB with 1 ETH");

        let sold = SwapOutcome {
            action: SwapAction::Sell,
            amount: "2.5".to_string(),
        };
        assert_eq!(sold.summary(&symbols), "Sold 2.5 UMB");
    }
}
