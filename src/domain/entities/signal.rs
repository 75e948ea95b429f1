use crate::domain::error::DomainError;
use crate::domain::values::action::Action;
use crate::domain::values::asset_class::AssetClass;
use crate::domain::values::confidence::Confidence;
use crate::domain::values::horizon::Horizon;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DISCLAIMER: &str = "Не инвестиционный совет. Торговля сопряжена с риском.";

/// A conditional plan offered next to the primary one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalAlternative {
    pub if_condition: String,
    pub action: Action,
    pub entry: f64,
    pub take_profit: [f64; 2],
    pub stop: f64,
}

/// Everything needed to build a [`Signal`]. Unchecked until passed to [`Signal::new`].
#[derive(Debug, Clone)]
pub struct SignalDraft {
    pub id: String,
    pub ticker: String,
    pub asset_class: AssetClass,
    pub horizon: Horizon,
    pub action: Action,
    pub entry: f64,
    pub take_profit: Vec<f64>,
    pub stop: f64,
    pub confidence: f64,
    pub position_size_pct_nav: f64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub narrative_ru: String,
    pub alternatives: Vec<SignalAlternative>,
}

/// A validated trade signal. Fields are read-only; the only way in is [`Signal::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    id: String,
    ticker: String,
    asset_class: AssetClass,
    horizon: Horizon,
    action: Action,
    entry: f64,
    take_profit: Vec<f64>,
    stop: f64,
    confidence: Confidence,
    position_size_pct_nav: f64,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    narrative_ru: String,
    alternatives: Vec<SignalAlternative>,
    disclaimer: String,
}

impl Signal {
    /// Checks the invariants and builds the signal.
    ///
    /// - `take_profit` holds 1 or 2 finite values and is stored sorted ascending
    /// - `entry` is finite and positive, `stop` is finite and positive
    /// - `expires_at` is strictly after `created_at`
    /// - confidence is clamped to [0, 1], position size to [0, 100]
    pub fn new(draft: SignalDraft) -> Result<Self, DomainError> {
        if draft.take_profit.is_empty() || draft.take_profit.len() > 2 {
            return Err(DomainError::Validation(format!(
                "take_profit must have 1 or 2 levels, got {}",
                draft.take_profit.len()
            )));
        }
        if draft.take_profit.iter().any(|tp| !tp.is_finite()) {
            return Err(DomainError::Validation(
                "take_profit levels must be finite".into(),
            ));
        }
        if !draft.entry.is_finite() || draft.entry <= 0.0 {
            return Err(DomainError::Validation(format!(
                "entry must be > 0, got {}",
                draft.entry
            )));
        }
        if !draft.stop.is_finite() || draft.stop <= 0.0 {
            return Err(DomainError::Validation(format!(
                "stop must be > 0, got {}",
                draft.stop
            )));
        }
        if draft.expires_at <= draft.created_at {
            return Err(DomainError::Validation(format!(
                "expires_at ({}) must be after created_at ({})",
                draft.expires_at, draft.created_at
            )));
        }

        let mut take_profit = draft.take_profit;
        take_profit.sort_by(|a, b| a.total_cmp(b));

        let size = if draft.position_size_pct_nav.is_nan() {
            0.0
        } else {
            draft.position_size_pct_nav.clamp(0.0, 100.0)
        };

        Ok(Self {
            id: draft.id,
            ticker: draft.ticker,
            asset_class: draft.asset_class,
            horizon: draft.horizon,
            action: draft.action,
            entry: draft.entry,
            take_profit,
            stop: draft.stop,
            confidence: Confidence::clamped(draft.confidence),
            position_size_pct_nav: size,
            created_at: draft.created_at,
            expires_at: draft.expires_at,
            narrative_ru: draft.narrative_ru,
            alternatives: draft.alternatives,
            disclaimer: DISCLAIMER.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn entry(&self) -> f64 {
        self.entry
    }

    /// Targets sorted ascending by price.
    pub fn take_profit(&self) -> &[f64] {
        &self.take_profit
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn position_size_pct_nav(&self) -> f64 {
        self.position_size_pct_nav
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn narrative_ru(&self) -> &str {
        &self.narrative_ru
    }

    pub fn alternatives(&self) -> &[SignalAlternative] {
        &self.alternatives
    }

    pub fn disclaimer(&self) -> &str {
        &self.disclaimer
    }
}
