//! Toy backtest: one synthetic random walk from the entry price.
//!
//! The noise generator uses a constant seed, so every signal is walked along
//! the same relative path. This illustrates the levels; it says nothing about
//! how the trade would have done on real data.

use crate::domain::entities::backtest_result::{BacktestResult, ExitReason};
use crate::domain::entities::signal::Signal;
use crate::domain::error::DomainError;
use crate::domain::values::action::Action;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Seed of the path generator. Independent of ticker and date.
pub const BACKTEST_SEED: u64 = 42;

/// Upper bound on `n_steps`.
pub const MAX_STEPS: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacktestParams {
    /// Number of random steps after the entry.
    pub n_steps: usize,
    /// Standard deviation of one step, in basis points of the entry.
    pub step_bp: f64,
    /// Round-trip fee in basis points.
    pub fee_bp: f64,
}

impl Default for BacktestParams {
    fn default() -> Self {
        Self {
            n_steps: 400,
            step_bp: 15.0,
            fee_bp: 2.0,
        }
    }
}

impl BacktestParams {
    fn validate(&self) -> Result<(), DomainError> {
        if self.n_steps > MAX_STEPS {
            return Err(DomainError::InvalidInput(format!(
                "n_steps must be <= {MAX_STEPS}, got {}",
                self.n_steps
            )));
        }
        if !self.step_bp.is_finite() || self.step_bp < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "step_bp must be >= 0, got {}",
                self.step_bp
            )));
        }
        if !self.fee_bp.is_finite() || self.fee_bp < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "fee_bp must be >= 0, got {}",
                self.fee_bp
            )));
        }
        Ok(())
    }
}

/// Box-Muller transform. `1 - u` keeps the log argument in (0, 1].
fn standard_normal(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Price path of `n_steps + 1` points starting at `entry`.
pub fn simulate_path(entry: f64, params: &BacktestParams) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(BACKTEST_SEED);
    let sigma = params.step_bp / 10_000.0;
    let mut path = vec![entry];
    path.extend((0..params.n_steps).scan(entry, |price, _| {
        *price += standard_normal(&mut rng) * sigma * entry;
        Some(*price)
    }));
    path
}

/// First rule that fires at price `p`: tp2, then tp1, then the stop.
fn exit_at(action: Action, p: f64, tp1: f64, tp2: f64, stop: f64) -> Option<(f64, ExitReason)> {
    match action {
        Action::Buy => {
            if p >= tp2 {
                Some((tp2, ExitReason::TakeProfit2))
            } else if p >= tp1 {
                Some((tp1, ExitReason::TakeProfit1))
            } else if p <= stop {
                Some((stop, ExitReason::Stop))
            } else {
                None
            }
        }
        Action::Short => {
            if p <= tp2 {
                Some((tp2, ExitReason::TakeProfit2))
            } else if p <= tp1 {
                Some((tp1, ExitReason::TakeProfit1))
            } else if p >= stop {
                Some((stop, ExitReason::Stop))
            } else {
                None
            }
        }
        Action::Close | Action::Wait => None,
    }
}

/// Walk the synthetic path until a target or the stop is hit.
///
/// WAIT/CLOSE signals open no position and return [`BacktestResult::no_trade`].
/// Targets are read as stored on the signal (`take_profit[0]` as tp1,
/// `take_profit[1]` as tp2). If nothing is hit, the trade closes at the last
/// path price with [`ExitReason::PathEnd`].
pub fn toy_backtest(signal: &Signal, params: &BacktestParams) -> Result<BacktestResult, DomainError> {
    params.validate()?;

    let entry = signal.entry();
    let action = signal.action();
    if !action.is_directional() {
        debug!(id = signal.id(), %action, "no position to backtest");
        return Ok(BacktestResult::no_trade(entry));
    }

    let (tp1, tp2) = match signal.take_profit() {
        [only] => (*only, *only),
        [first, second, ..] => (*first, *second),
        [] => return Ok(BacktestResult::no_trade(entry)),
    };
    let stop = signal.stop();

    let path = simulate_path(entry, params);
    let mut outcome = None;
    for (i, p) in path.iter().enumerate() {
        if let Some((price, reason)) = exit_at(action, *p, tp1, tp2, stop) {
            outcome = Some((i, price, reason));
            break;
        }
    }
    let (steps, exit_price, exit_reason) = match outcome {
        Some(hit) => hit,
        None => {
            let last = path.len() - 1;
            (last, path[last], ExitReason::PathEnd)
        }
    };

    let raw = match action {
        Action::Short => (entry - exit_price) / entry,
        _ => (exit_price - entry) / entry,
    };
    let pnl = raw - params.fee_bp / 10_000.0;

    debug!(id = signal.id(), steps, exit_price, %exit_reason, pnl, "backtest finished");

    Ok(BacktestResult {
        steps,
        exit_price,
        pnl,
        equity: 1.0 + pnl,
        exit_reason,
    })
}
