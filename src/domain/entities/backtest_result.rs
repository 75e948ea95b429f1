use serde::Serialize;
use std::fmt;

/// Which rule closed the simulated trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    TakeProfit2,
    TakeProfit1,
    Stop,
    /// No level was touched; closed at the last simulated price.
    PathEnd,
    /// WAIT/CLOSE signal, nothing was simulated.
    NoTrade,
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitReason::TakeProfit2 => write!(f, "take_profit_2"),
            ExitReason::TakeProfit1 => write!(f, "take_profit_1"),
            ExitReason::Stop => write!(f, "stop"),
            ExitReason::PathEnd => write!(f, "path_end"),
            ExitReason::NoTrade => write!(f, "no_trade"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BacktestResult {
    /// Path index at which the trade closed.
    pub steps: usize,
    pub exit_price: f64,
    /// Return after the round-trip fee.
    pub pnl: f64,
    pub equity: f64,
    pub exit_reason: ExitReason,
}

impl BacktestResult {
    pub fn no_trade(entry: f64) -> Self {
        Self {
            steps: 0,
            exit_price: entry,
            pnl: 0.0,
            equity: 1.0,
            exit_reason: ExitReason::NoTrade,
        }
    }
}
