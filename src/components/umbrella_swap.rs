// src/components/umbrella_swap.rs
use dioxus::prelude::*;
use crate::amount::{format_amount, from_smallest_units};
use crate::balance::{settle_base_balance, BalanceSource};
use crate::components::amount_field::AmountField;
use crate::components::common::{SwapCallbacks, SwapStatus};
use crate::dispatcher::execute_swap;
use crate::swap::{Balances, SwapAction, SwapForm, Symbols};
use bigdecimal::BigDecimal;
use std::sync::Arc;

const EXCEEDED_BALANCE_WARNING: &str = "You don't have enough balance in your wallet to cover that.";

/// Buy/sell form for the token.
///
/// The base currency balance is read from the `BalanceSource` in context;
/// the token balance is handed in by the host in smallest units. Swaps are
/// delegated to `handler`.
#[component]
pub fn UmbrellaSwap(
    handler: SwapCallbacks,
    token_balance: u128,
    token_decimals: u32,
    base_symbol: String,
    token_symbol: String,
) -> Element {
    let balance_source = use_context::<Arc<dyn BalanceSource>>();

    let mut form = use_signal(SwapForm::new);
    let mut base_balance = use_signal(|| None as Option<BigDecimal>);
    let mut balance_error = use_signal(|| None as Option<String>);
    let mut swapping = use_signal(|| false);
    let mut status = use_signal(|| SwapStatus::Idle);

    // Look the base balance up once per mount
    use_effect(move || {
        let source = balance_source.clone();
        spawn(async move {
            let (balance, error) = settle_base_balance(source.base_balance().await);
            log::debug!("Base balance settled at {}", format_amount(&balance));
            balance_error.set(error);
            base_balance.set(Some(balance));
        });
    });

    let symbols = Symbols::new(base_symbol.clone(), token_symbol.clone());
    let balances = Balances::with_pending_base(
        base_balance(),
        from_smallest_units(token_balance, token_decimals),
    );

    let current = form.read().clone();
    let action = current.action();
    let max_text = format_amount(current.max_balance(&balances));
    let exceeded = current.exceeded_balance(&balances);
    let amount_error = current.amount_error();
    let can_submit = current.can_submit_while(&balances, swapping());
    let balance_loading = action == SwapAction::Buy && base_balance().is_none();

    let input_symbol = symbols.input(action).to_string();
    let output_symbol = symbols.output(action).to_string();
    let input_placeholder = current.input_placeholder(&symbols);
    let output_placeholder = current.output_placeholder(&symbols);

    let handle_toggle = move |_| {
        let next = form.write().toggle();
        log::debug!("Swap action toggled to {}", next);
    };

    let handle_max = {
        let balances = balances.clone();
        move |_| {
            form.write().fill_max(&balances);
        }
    };

    let handle_swap = {
        let symbols = symbols.clone();
        move |_| {
            if swapping() {
                return;
            }

            let (action, amount) = {
                let form = form.read();
                (form.action(), form.amount().to_string())
            };
            let handler = handler.handler();
            let symbols = symbols.clone();

            log::debug!("Swap clicked: {} {}", action, amount);
            swapping.set(true);
            status.set(SwapStatus::Idle);

            spawn(async move {
                match execute_swap(handler.as_ref(), action, &amount).await {
                    Ok(outcome) => {
                        let summary = outcome.summary(&symbols);
                        log::info!("{}", summary);
                        status.set(SwapStatus::Completed(summary));
                    }
                    Err(e) => {
                        log::error!("Swap failed: {}", e);
                        status.set(SwapStatus::Failed(e.to_string()));
                    }
                }
                swapping.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "umbrella-swap",

            h2 { class: "umbrella-swap-title", "Swap ${token_symbol}" }
            p {
                class: "umbrella-swap-subtitle",
                "Swap your tokens for ${token_symbol} and start investing with us."
            }

            div {
                class: "umbrella-swap-body",

                div {
                    class: "swap-toggle-row",
                    span { "Buy" }
                    input {
                        class: "swap-toggle",
                        r#type: "checkbox",
                        checked: action == SwapAction::Sell,
                        onchange: handle_toggle,
                    }
                    span { "Sell" }
                }

                div {
                    class: "swap-section",

                    h3 { "{action} ${token_symbol}" }

                    AmountField {
                        value: current.amount().to_string(),
                        symbol: input_symbol.clone(),
                        placeholder: input_placeholder,
                        disabled: swapping(),
                        on_change: move |value: String| form.write().set_amount(value),
                    }

                    if balance_loading {
                        p { class: "swap-max-line", "Loading balance…" }
                    } else {
                        p {
                            class: "swap-max-line",
                            onclick: handle_max,
                            "Max. {max_text} {input_symbol}"
                        }
                    }

                    if let Some(error) = amount_error {
                        p { class: "swap-warning", "{error}" }
                    }

                    if exceeded {
                        p { class: "swap-warning", "{EXCEEDED_BALANCE_WARNING}" }
                    }

                    label { class: "swap-receive-label", "You will receive:" }

                    AmountField {
                        value: current.output_amount().to_string(),
                        symbol: output_symbol,
                        placeholder: output_placeholder,
                        disabled: swapping(),
                        on_change: move |value: String| form.write().set_output_amount(value),
                    }
                }

                if let Some(error) = balance_error() {
                    div { class: "error-message", "{error}" }
                }

                if let SwapStatus::Failed(error) = status() {
                    div { class: "error-message", "{error}" }
                }

                if let SwapStatus::Completed(summary) = status() {
                    div { class: "success-message", "{summary}" }
                }

                button {
                    class: "swap-submit",
                    disabled: !can_submit,
                    onclick: handle_swap,
                    if swapping() { "Swapping…" } else { "Swap" }
                }
            }
        }
    }
}
