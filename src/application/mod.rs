pub mod backtest;
pub mod fetch_price;
pub mod generate_signal;
pub mod narrative;
pub mod risk;
pub mod signal_engine;
