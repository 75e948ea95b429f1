//! Position sizing and level sanity checks.

use crate::domain::values::action::Action;
use crate::domain::values::asset_class::AssetClass;
use crate::domain::values::horizon::Horizon;
use crate::domain::values::levels::{round_to, Levels};

/// Smallest position any signal gets, in percent of NAV.
pub const MIN_POSITION_PCT: f64 = 0.3;

/// Largest position in percent of NAV for an asset class and horizon.
pub fn position_cap(asset_class: AssetClass, horizon: Horizon) -> f64 {
    match (asset_class, horizon) {
        (AssetClass::Crypto, Horizon::Intraday) => 1.2,
        (AssetClass::Crypto, Horizon::Swing) => 1.6,
        (AssetClass::Crypto, Horizon::Position) => 2.0,
        (AssetClass::Equity, Horizon::Intraday) => 0.8,
        (AssetClass::Equity, Horizon::Swing) => 1.2,
        (AssetClass::Equity, Horizon::Position) => 1.5,
    }
}

/// Scale position size linearly with confidence, from 0.3% NAV up to the cap.
pub fn target_vol_position_size(confidence: f64, asset_class: AssetClass, horizon: Horizon) -> f64 {
    let cap = position_cap(asset_class, horizon);
    let size = MIN_POSITION_PCT + confidence * (cap - MIN_POSITION_PCT);
    round_to(size, 2)
}

/// Push targets and stop to the correct side of the entry.
///
/// BUY: targets at least 0.1% above entry (tp2 at least 0.1% above tp1), stop at least 0.1% below.
/// SHORT: the mirror image. WAIT/CLOSE levels are not traded and pass through.
pub fn sanitize_levels(action: Action, levels: Levels) -> Levels {
    let Levels {
        entry,
        mut tp1,
        mut tp2,
        mut stop,
    } = levels;
    match action {
        Action::Buy => {
            tp1 = tp1.max(entry * 1.001);
            tp2 = tp2.max(tp1 * 1.001);
            stop = stop.min(entry * 0.999);
        }
        Action::Short => {
            tp1 = tp1.min(entry * 0.999);
            tp2 = tp2.min(tp1 * 0.999);
            stop = stop.max(entry * 1.001);
        }
        Action::Close | Action::Wait => {}
    }
    Levels {
        entry,
        tp1,
        tp2,
        stop,
    }
}
