pub mod amount_field;
pub mod common;
pub mod swap_view;
pub mod umbrella_swap;

pub use swap_view::SwapView;
pub use umbrella_swap::UmbrellaSwap;
