// src/components/swap_view.rs
use dioxus::prelude::*;
use crate::components::common::SwapCallbacks;
use crate::components::umbrella_swap::UmbrellaSwap;
use crate::config::SwapConfig;
use crate::dispatcher::LoggingSwapHandler;

/// Page hosting the swap form with the configured balances
#[component]
pub fn SwapView() -> Element {
    let config = use_context::<SwapConfig>();

    // Created once so the prop compares equal across renders
    let handler = use_hook(|| {
        SwapCallbacks::new(LoggingSwapHandler {
            token_symbol: config.token_symbol.clone(),
        })
    });

    rsx! {
        div {
            class: "swap-page",
            if !config.is_live() {
                div {
                    class: "swap-demo-notice",
                    "No account configured, showing a fixed balance."
                }
            }
            UmbrellaSwap {
                handler: handler,
                token_balance: config.token_balance,
                token_decimals: config.token_decimals,
                base_symbol: config.base_symbol.clone(),
                token_symbol: config.token_symbol.clone(),
            }
        }
    }
}
