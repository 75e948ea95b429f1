//! Seeded signal generation.
//!
//! Every step is a pure function of its inputs. Randomness comes from a
//! locally constructed `ChaCha8Rng` seeded per call, so the same ticker,
//! asset class and horizon give the same signal for a whole UTC day.

use crate::application::narrative::trader_tone_narrative_ru;
use crate::application::risk::{sanitize_levels, target_vol_position_size};
use crate::domain::entities::signal::{Signal, SignalAlternative, SignalDraft};
use crate::domain::error::DomainError;
use crate::domain::values::action::Action;
use crate::domain::values::horizon::Horizon;
use crate::domain::values::levels::{round_to, Levels};
use crate::domain::values::signal_request::SignalRequest;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Action distribution. Order matters for reproducibility.
const ACTION_WEIGHTS: [(Action, f64); 4] = [
    (Action::Wait, 0.35),
    (Action::Buy, 0.30),
    (Action::Short, 0.30),
    (Action::Close, 0.05),
];

const CONFIDENCE_SEED_OFFSET: u64 = 1337;
const CONFIDENCE_JITTER_MIN: f64 = -0.05;
const CONFIDENCE_JITTER_MAX: f64 = 0.08;
const CONFIDENCE_FLOOR: f64 = 0.50;
const CONFIDENCE_CEIL: f64 = 0.90;

fn bp_fraction(buffer_bp: u32) -> f64 {
    buffer_bp as f64 / 10_000.0
}

/// Seed for `key` on `date`: the first 8 hex digits of `sha256(key + "YYYY-MM-DD")`.
pub fn daily_seed(key: &str, date: NaiveDate) -> u64 {
    let day = date.format("%Y-%m-%d").to_string();
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hasher.update(day.as_bytes());
    let digest = hasher.finalize();
    let seed = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) as u64;
    debug!(key, day = %day, prefix = %hex::encode(&digest[..4]), seed, "derived daily seed");
    seed
}

/// One draw from the fixed action distribution.
pub fn choose_action(seed: u64) -> Action {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let total: f64 = ACTION_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut draw = rng.gen::<f64>() * total;
    for (action, weight) in ACTION_WEIGHTS {
        if draw < weight {
            return action;
        }
        draw -= weight;
    }
    // Only reachable through float residue at the very top of the range.
    ACTION_WEIGHTS[ACTION_WEIGHTS.len() - 1].0
}

/// Entry, targets and stop around `price`, sanitized and rounded to 4 decimals.
pub fn gen_levels(action: Action, price: f64, buffer_bp: u32) -> Levels {
    let bp = bp_fraction(buffer_bp);
    let raw = match action {
        Action::Buy => {
            let entry = round_to(price * (1.0 - 0.3 * bp), 4);
            Levels {
                entry,
                tp1: round_to(entry * (1.0 + 0.8 * bp), 4),
                tp2: round_to(entry * (1.0 + 1.8 * bp), 4),
                stop: round_to(entry * (1.0 - 0.9 * bp), 4),
            }
        }
        Action::Short => {
            let entry = round_to(price * (1.0 + 0.3 * bp), 4);
            Levels {
                entry,
                tp1: round_to(entry * (1.0 - 0.8 * bp), 4),
                tp2: round_to(entry * (1.0 - 1.8 * bp), 4),
                stop: round_to(entry * (1.0 + 0.9 * bp), 4),
            }
        }
        Action::Close | Action::Wait => Levels::flat(price),
    };
    round_targets(sanitize_levels(action, raw))
}

fn round_targets(levels: Levels) -> Levels {
    Levels {
        entry: levels.entry,
        tp1: round_to(levels.tp1, 4),
        tp2: round_to(levels.tp2, 4),
        stop: round_to(levels.stop, 4),
    }
}

fn base_confidence(action: Action) -> f64 {
    match action {
        Action::Wait => 0.52,
        Action::Buy | Action::Short => 0.60,
        Action::Close => 0.55,
    }
}

/// Base confidence for the action plus seeded jitter, clamped to [0.50, 0.90].
pub fn gen_confidence(seed: u64, action: Action) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(CONFIDENCE_SEED_OFFSET));
    let jitter = rng.gen_range(CONFIDENCE_JITTER_MIN..CONFIDENCE_JITTER_MAX);
    let conf = (base_confidence(action) + jitter).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEIL);
    round_to(conf, 2)
}

/// The "if the market does X instead" plan shown next to the primary one.
pub fn alternative_scenario(action: Action, entry: f64, buffer_bp: u32) -> SignalAlternative {
    let bp = bp_fraction(buffer_bp);
    let (alt_action, raw, if_condition) = match action {
        Action::Buy => {
            let alt_entry = round_to(entry * (1.0 + 0.6 * bp), 4);
            let levels = Levels {
                entry: alt_entry,
                tp1: round_to(alt_entry * (1.0 + 0.9 * bp), 4),
                tp2: round_to(alt_entry * (1.0 + 1.9 * bp), 4),
                stop: round_to(alt_entry * (1.0 - 0.9 * bp), 4),
            };
            let trigger = round_to(entry * (1.0 + 0.5 * bp), 4);
            (Action::Buy, levels, format!("если цена закрепится выше ~{trigger}"))
        }
        Action::Short => {
            let alt_entry = round_to(entry * (1.0 - 0.6 * bp), 4);
            let levels = Levels {
                entry: alt_entry,
                tp1: round_to(alt_entry * (1.0 - 0.9 * bp), 4),
                tp2: round_to(alt_entry * (1.0 - 1.9 * bp), 4),
                stop: round_to(alt_entry * (1.0 + 0.9 * bp), 4),
            };
            let trigger = round_to(entry * (1.0 - 0.5 * bp), 4);
            (Action::Short, levels, format!("если цена закрепится ниже ~{trigger}"))
        }
        Action::Close | Action::Wait => {
            let alt_entry = round_to(entry * (1.0 + 0.8 * bp), 4);
            let levels = Levels {
                entry: alt_entry,
                tp1: round_to(alt_entry * (1.0 + 1.0 * bp), 4),
                tp2: round_to(alt_entry * (1.0 + 2.0 * bp), 4),
                stop: round_to(alt_entry * (1.0 - 1.0 * bp), 4),
            };
            let trigger = round_to(entry * (1.0 + 0.7 * bp), 4);
            (Action::Buy, levels, format!("если цена вырвется выше ~{trigger}"))
        }
    };
    let levels = round_targets(sanitize_levels(alt_action, raw));
    SignalAlternative {
        if_condition,
        action: alt_action,
        entry: levels.entry,
        take_profit: [levels.tp1, levels.tp2],
        stop: levels.stop,
    }
}

fn signal_id(ticker: &str, now: DateTime<Utc>, horizon: Horizon) -> String {
    format!("{ticker}-{}-{horizon}", now.format("%Y%m%d%H%M%S"))
}

/// Build a signal for `request` at `now` from the last traded price.
pub fn build_signal(
    request: &SignalRequest,
    last_price: f64,
    now: DateTime<Utc>,
) -> Result<Signal, DomainError> {
    if !last_price.is_finite() || last_price <= 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "last price must be a positive number, got {last_price}"
        )));
    }

    let horizon = request.horizon();
    let buffer_bp = horizon.buffer_bp();
    let seed = daily_seed(&request.seed_key(), now.date_naive());
    let action = choose_action(seed);
    let levels = gen_levels(action, last_price, buffer_bp);
    let confidence = gen_confidence(seed, action);
    let size_pct = target_vol_position_size(confidence, request.asset_class(), horizon);
    let alternative = alternative_scenario(action, levels.entry, buffer_bp);

    debug!(
        ticker = request.ticker(),
        %action,
        entry = levels.entry,
        tp1 = levels.tp1,
        tp2 = levels.tp2,
        stop = levels.stop,
        confidence,
        size_pct,
        "generated levels"
    );

    Signal::new(SignalDraft {
        id: signal_id(request.ticker(), now, horizon),
        ticker: request.ticker().to_string(),
        asset_class: request.asset_class(),
        horizon,
        action,
        entry: levels.entry,
        take_profit: vec![levels.tp1, levels.tp2],
        stop: levels.stop,
        confidence,
        position_size_pct_nav: size_pct,
        created_at: now,
        expires_at: now + Duration::hours(horizon.expiry_hours()),
        narrative_ru: trader_tone_narrative_ru(action, horizon, last_price),
        alternatives: vec![alternative],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::asset_class::AssetClass;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_seed_matches_sha256_prefix() {
        // sha256("BTCUSDT-crypto-swing2026-01-15") starts with 601a8926
        assert_eq!(daily_seed("BTCUSDT-crypto-swing", date(2026, 1, 15)), 0x601a_8926);
        // sha256("BTCUSDT-crypto-swing2026-01-16") starts with 18b0be77
        assert_eq!(daily_seed("BTCUSDT-crypto-swing", date(2026, 1, 16)), 0x18b0_be77);
    }

    #[test]
    fn test_choose_action_is_reproducible() {
        for seed in [0_u64, 1, 42, 0x601a_8926, u32::MAX as u64] {
            assert_eq!(choose_action(seed), choose_action(seed));
        }
    }

    #[test]
    fn test_choose_action_covers_every_action() {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..2000_u64 {
            seen.insert(choose_action(seed));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_action_frequencies_follow_weights() {
        let n = 20_000_u64;
        let waits = (0..n).filter(|s| choose_action(*s) == Action::Wait).count() as f64;
        let closes = (0..n).filter(|s| choose_action(*s) == Action::Close).count() as f64;
        assert!((waits / n as f64 - 0.35).abs() < 0.03);
        assert!((closes / n as f64 - 0.05).abs() < 0.02);
    }

    #[test]
    fn test_buy_levels_formula() {
        // bp = 0.006: entry = 65000 * 0.9982 = 64883
        let l = gen_levels(Action::Buy, 65_000.0, 60);
        assert_eq!(l.entry, 64883.0);
        assert!((l.tp1 - round_to(64883.0 * 1.0048, 4)).abs() < 1e-9);
        assert!((l.tp2 - round_to(64883.0 * 1.0108, 4)).abs() < 1e-9);
        assert!((l.stop - round_to(64883.0 * 0.9946, 4)).abs() < 1e-9);
        assert!(l.stop < l.entry && l.entry < l.tp1 && l.tp1 < l.tp2);
    }

    #[test]
    fn test_short_levels_formula() {
        let l = gen_levels(Action::Short, 65_000.0, 60);
        assert_eq!(l.entry, 65117.0);
        assert!(l.tp2 < l.tp1 && l.tp1 < l.entry && l.entry < l.stop);
    }

    #[test]
    fn test_wait_levels_are_flat() {
        let l = gen_levels(Action::Wait, 230.5, 25);
        assert_eq!(l, Levels::flat(230.5));
    }

    #[test]
    fn test_confidence_range_and_rounding() {
        for seed in 0..500_u64 {
            for action in [Action::Buy, Action::Short, Action::Close, Action::Wait] {
                let c = gen_confidence(seed, action);
                assert!((0.50..=0.90).contains(&c), "seed {seed}: {c}");
                assert!((c * 100.0 - (c * 100.0).round()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_alternative_for_buy_is_breakout_above() {
        let alt = alternative_scenario(Action::Buy, 100.0, 200);
        assert_eq!(alt.action, Action::Buy);
        assert_eq!(alt.entry, 101.2);
        assert!(alt.if_condition.contains("выше ~101"));
        assert!(alt.stop < alt.entry && alt.entry < alt.take_profit[0]);
        assert!(alt.take_profit[0] < alt.take_profit[1]);
    }

    #[test]
    fn test_alternative_for_short_is_breakdown_below() {
        let alt = alternative_scenario(Action::Short, 100.0, 200);
        assert_eq!(alt.action, Action::Short);
        assert_eq!(alt.entry, 98.8);
        assert!(alt.if_condition.contains("ниже ~99"));
        assert!(alt.take_profit[1] < alt.take_profit[0] && alt.take_profit[0] < alt.entry);
        assert!(alt.stop > alt.entry);
    }

    #[test]
    fn test_alternative_for_wait_is_conditional_buy() {
        for action in [Action::Wait, Action::Close] {
            let alt = alternative_scenario(action, 100.0, 200);
            assert_eq!(alt.action, Action::Buy);
            assert_eq!(alt.entry, 101.6);
            assert!(alt.if_condition.contains("вырвется выше ~101.4"));
        }
    }

    #[test]
    fn test_build_signal_rejects_bad_price() {
        let req = SignalRequest::new("AAPL", AssetClass::Equity, Horizon::Swing).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        assert!(matches!(
            build_signal(&req, 0.0, now),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(build_signal(&req, f64::NAN, now).is_err());
    }

    #[test]
    fn test_signal_id_format() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 5).unwrap();
        assert_eq!(
            signal_id("AAPL", now, Horizon::Position),
            "AAPL-20260115093005-position"
        );
    }
}
