/// Entry, two targets and a stop, in generation order (tp1 is the nearer target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    pub entry: f64,
    pub tp1: f64,
    pub tp2: f64,
    pub stop: f64,
}

impl Levels {
    /// All four levels at one price. Used for WAIT/CLOSE.
    pub fn flat(price: f64) -> Self {
        Self {
            entry: price,
            tp1: price,
            tp2: price,
            stop: price,
        }
    }
}

/// Round to `decimals` places, ties away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
