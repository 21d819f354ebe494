use crate::dispatcher::SwapHandler;
use std::sync::Arc;

/// Injected swap callbacks, passed to components as a prop.
/// Two values are equal when they wrap the same handler instance.
#[derive(Clone)]
pub struct SwapCallbacks(Arc<dyn SwapHandler>);

impl SwapCallbacks {
    pub fn new(handler: impl SwapHandler + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn handler(&self) -> Arc<dyn SwapHandler> {
        self.0.clone()
    }
}

impl PartialEq for SwapCallbacks {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// Status line under the swap button
#[derive(Clone, Debug, PartialEq)]
pub enum SwapStatus {
    Idle,
    Completed(String),
    Failed(String),
}
