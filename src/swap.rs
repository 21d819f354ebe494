// src/swap.rs
use crate::amount::{format_amount, parse_amount};
use crate::error::SwapError;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use std::fmt;

/// Buy or sell mode of the swap form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapAction {
    #[default]
    Buy,
    Sell,
}

impl SwapAction {
    pub fn toggled(self) -> Self {
        match self {
            SwapAction::Buy => SwapAction::Sell,
            SwapAction::Sell => SwapAction::Buy,
        }
    }
}

impl fmt::Display for SwapAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SwapAction::Buy => write!(f, "Buy"),
            SwapAction::Sell => write!(f, "Sell"),
        }
    }
}

/// Balances the form validates against
#[derive(Debug, Clone, PartialEq)]
pub struct Balances {
    pub base: BigDecimal,
    pub token: BigDecimal,
}

impl Balances {
    pub fn new(base: BigDecimal, token: BigDecimal) -> Self {
        Self { base, token }
    }

    /// Balances before the base lookup has settled. A pending base balance
    /// counts as zero, so nothing can be bought with it yet.
    pub fn with_pending_base(base: Option<BigDecimal>, token: BigDecimal) -> Self {
        Self::new(base.unwrap_or_else(BigDecimal::zero), token)
    }

    /// Spendable balance for an action: base currency pays for a buy,
    /// the token itself pays for a sell
    pub fn max_for(&self, action: SwapAction) -> &BigDecimal {
        match action {
            SwapAction::Buy => &self.base,
            SwapAction::Sell => &self.token,
        }
    }
}

impl Default for Balances {
    fn default() -> Self {
        Self::new(BigDecimal::zero(), BigDecimal::zero())
    }
}

/// Currency labels for both sides of the swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub base: String,
    pub token: String,
}

impl Symbols {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            token: token.into(),
        }
    }

    /// Symbol of what the user pays with
    pub fn input(&self, action: SwapAction) -> &str {
        match action {
            SwapAction::Buy => &self.base,
            SwapAction::Sell => &self.token,
        }
    }

    /// Symbol of what the user receives
    pub fn output(&self, action: SwapAction) -> &str {
        self.input(action.toggled())
    }
}

/// Local view state of the swap form.
///
/// `amount` and `output_amount` are stored exactly as typed. Everything else
/// (max balance, exceeded warning, submit gating) is derived on demand from
/// the current balances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapForm {
    action: SwapAction,
    amount: String,
    output_amount: String,
}

impl SwapForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(&self) -> SwapAction {
        self.action
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn output_amount(&self) -> &str {
        &self.output_amount
    }

    /// Flip between buy and sell, returning the new action
    pub fn toggle(&mut self) -> SwapAction {
        self.action = self.action.toggled();
        self.action
    }

    pub fn set_amount(&mut self, value: String) {
        self.amount = value;
    }

    pub fn set_output_amount(&mut self, value: String) {
        self.output_amount = value;
    }

    pub fn max_balance<'a>(&self, balances: &'a Balances) -> &'a BigDecimal {
        balances.max_for(self.action)
    }

    /// Put the whole spendable balance into the amount field
    pub fn fill_max(&mut self, balances: &Balances) {
        self.amount = format_amount(self.max_balance(balances));
    }

    /// Parse error for a non-empty amount that is not a number
    pub fn amount_error(&self) -> Option<SwapError> {
        if self.amount.is_empty() {
            return None;
        }
        parse_amount(&self.amount).err()
    }

    pub fn exceeded_balance(&self, balances: &Balances) -> bool {
        match parse_amount(&self.amount) {
            Ok(value) => &value > self.max_balance(balances),
            Err(_) => false,
        }
    }

    /// Whether the swap button is enabled
    pub fn can_submit(&self, balances: &Balances) -> bool {
        if self.amount.is_empty() {
            return false;
        }
        match parse_amount(&self.amount) {
            Ok(value) => value > BigDecimal::zero() && !self.exceeded_balance(balances),
            Err(_) => false,
        }
    }

    /// Swap button state while a previous swap may still be running
    pub fn can_submit_while(&self, balances: &Balances, swapping: bool) -> bool {
        !swapping && self.can_submit(balances)
    }

    pub fn input_placeholder(&self, symbols: &Symbols) -> String {
        format!("0 {}", symbols.input(self.action))
    }

    pub fn output_placeholder(&self, symbols: &Symbols) -> String {
        format!("0 {}", symbols.output(self.action))
    }
}
