// src/components/amount_field.rs
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AmountFieldProps {
    pub value: String,
    pub symbol: String,
    pub on_change: EventHandler<String>,
    pub placeholder: Option<String>,
    pub disabled: Option<bool>,
}

/// Numeric text input with a currency label. The typed text is passed on
/// unchanged; parsing is up to the owner.
#[component]
pub fn AmountField(props: AmountFieldProps) -> Element {
    let on_change = props.on_change;
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| format!("0 {}", props.symbol));
    let disabled = props.disabled.unwrap_or(false);

    rsx! {
        div {
            class: "swap-amount-row",
            input {
                class: "swap-amount-field",
                r#type: "text",
                autocomplete: "off",
                placeholder: "{placeholder}",
                value: "{props.value}",
                disabled: disabled,
                oninput: move |e| on_change.call(e.value()),
            }
            span {
                class: "swap-amount-symbol",
                "{props.symbol}"
            }
        }
    }
}
