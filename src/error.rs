use std::fmt;

/// Step of the swap chain that an injected callback was running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStage {
    Approve,
    Buy,
    Sell,
}

impl fmt::Display for SwapStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SwapStage::Approve => write!(f, "Approve"),
            SwapStage::Buy => write!(f, "Buy"),
            SwapStage::Sell => write!(f, "Sell"),
        }
    }
}

// Error type shared by the form, the dispatcher and the balance lookup
#[derive(Debug, Clone, PartialEq)]
pub enum SwapError {
    /// The entered amount is not a number, or not a positive one
    InvalidAmount(String),
    /// An injected buy/sell/approve call rejected
    CallbackFailure { stage: SwapStage, message: String },
    /// The base currency balance could not be looked up
    Balance(String),
}

impl SwapError {
    pub fn callback(stage: SwapStage, message: impl Into<String>) -> Self {
        SwapError::CallbackFailure {
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SwapError::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            SwapError::CallbackFailure { stage, message } => {
                write!(f, "{} failed: {}", stage, message)
            }
            SwapError::Balance(msg) => write!(f, "Balance unavailable: {}", msg),
        }
    }
}

impl std::error::Error for SwapError {}

impl From<reqwest::Error> for SwapError {
    fn from(e: reqwest::Error) -> Self {
        SwapError::Balance(format!("Request failed: {}", e))
    }
}
