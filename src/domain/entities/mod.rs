pub mod backtest_result;
pub mod signal;
