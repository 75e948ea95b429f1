use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a signal tells the trader to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Short,
    Close,
    Wait,
}

impl Action {
    /// True for actions that open a position and can be backtested.
    pub fn is_directional(&self) -> bool {
        matches!(self, Action::Buy | Action::Short)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Short => write!(f, "SHORT"),
            Action::Close => write!(f, "CLOSE"),
            Action::Wait => write!(f, "WAIT"),
        }
    }
}

impl FromStr for Action {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(Action::Buy),
            "short" => Ok(Action::Short),
            "close" => Ok(Action::Close),
            "wait" => Ok(Action::Wait),
            _ => Err(format!("Unknown action: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Action::Short).unwrap(), "\"SHORT\"");
        let back: Action = serde_json::from_str("\"WAIT\"").unwrap();
        assert_eq!(back, Action::Wait);
    }

    #[test]
    fn test_directional() {
        assert!(Action::Buy.is_directional());
        assert!(Action::Short.is_directional());
        assert!(!Action::Close.is_directional());
        assert!(!Action::Wait.is_directional());
    }
}
