use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trade time frame. Sets the level buffer and how long a signal stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Intraday,
    Swing,
    Position,
}

impl Horizon {
    /// Typical move from the current price, in basis points.
    pub fn buffer_bp(&self) -> u32 {
        match self {
            Horizon::Intraday => 25,
            Horizon::Swing => 60,
            Horizon::Position => 200,
        }
    }

    pub fn expiry_hours(&self) -> i64 {
        match self {
            Horizon::Intraday => 8,
            Horizon::Swing => 48,
            Horizon::Position => 7 * 24,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Horizon::Intraday => write!(f, "intraday"),
            Horizon::Swing => write!(f, "swing"),
            Horizon::Position => write!(f, "position"),
        }
    }
}

impl FromStr for Horizon {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intraday" => Ok(Horizon::Intraday),
            "swing" => Ok(Horizon::Swing),
            "position" => Ok(Horizon::Position),
            _ => Err(format!(
                "Unknown horizon: '{s}'. Use 'intraday', 'swing' or 'position'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_grow_with_horizon() {
        assert_eq!(Horizon::Intraday.buffer_bp(), 25);
        assert_eq!(Horizon::Swing.buffer_bp(), 60);
        assert_eq!(Horizon::Position.buffer_bp(), 200);
    }

    #[test]
    fn test_expiry_hours() {
        assert_eq!(Horizon::Intraday.expiry_hours(), 8);
        assert_eq!(Horizon::Swing.expiry_hours(), 48);
        assert_eq!(Horizon::Position.expiry_hours(), 168);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Swing".parse::<Horizon>().unwrap(), Horizon::Swing);
        assert!("weekly".parse::<Horizon>().is_err());
    }
}
