//! Ladder policy — the fixed constants behind the plan, named and validated.
//!
//! The formulas in `planner` take these by reference so the constants are
//! auditable and testable without touching the formula code. The defaults
//! reproduce the published ladder exactly: 20/30/30/20 splits, 0.80/1.20
//! adjustment, {3,5,10,15} leverage tiers, 5% take-profit, 0.5% stop offset,
//! 1.8x emergency fund.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Side;

/// Number of scheduled entries in the ladder.
pub const TRANCHE_COUNT: usize = 4;

/// Policy constants for the four-tranche ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderPolicy {
    /// Portfolio share per tranche; must sum to 1.0.
    pub entry_splits: [f64; TRANCHE_COUNT],
    /// Each long tranche enters at the previous price times this factor.
    pub long_adjustment: f64,
    /// Each short tranche enters at the previous price times this factor.
    pub short_adjustment: f64,
    /// Leverage tiers for liquidation prices; every tier must exceed 1.
    pub leverage_tiers: [u32; 4],
    /// Take-profit distance from the running average, in percent.
    pub take_profit_pct: f64,
    /// Stop-loss offset beyond the fourth entry, in percent.
    pub stop_loss_offset_pct: f64,
    /// Recommended emergency fund as a multiple of the portfolio.
    pub emergency_fund_multiple: f64,
}

impl Default for LadderPolicy {
    fn default() -> Self {
        Self {
            entry_splits: [0.20, 0.30, 0.30, 0.20],
            long_adjustment: 0.80,
            short_adjustment: 1.20,
            leverage_tiers: [3, 5, 10, 15],
            take_profit_pct: 5.0,
            stop_loss_offset_pct: 0.5,
            emergency_fund_multiple: 1.8,
        }
    }
}

impl LadderPolicy {
    /// Entry-price adjustment factor for the given direction.
    pub fn adjustment_for(&self, side: Side) -> f64 {
        match side {
            Side::Long => self.long_adjustment,
            Side::Short => self.short_adjustment,
        }
    }

    /// Check the policy is internally consistent.
    ///
    /// The short liquidation formula divides by `L - 1`, so tiers at or
    /// below 1 are rejected here rather than guarded in the formula.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for (i, split) in self.entry_splits.iter().enumerate() {
            if !(split.is_finite() && *split > 0.0) {
                return Err(PolicyError::NonPositiveSplit {
                    index: i + 1,
                    value: *split,
                });
            }
        }
        let sum: f64 = self.entry_splits.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(PolicyError::SplitsDoNotSumToOne { sum });
        }
        if !(self.long_adjustment.is_finite() && self.long_adjustment > 0.0) {
            return Err(PolicyError::NonPositiveAdjustment {
                value: self.long_adjustment,
            });
        }
        if !(self.short_adjustment.is_finite() && self.short_adjustment > 0.0) {
            return Err(PolicyError::NonPositiveAdjustment {
                value: self.short_adjustment,
            });
        }
        for tier in self.leverage_tiers {
            if tier <= 1 {
                return Err(PolicyError::LeverageTierTooLow { tier });
            }
        }
        if !(self.take_profit_pct.is_finite() && self.take_profit_pct > 0.0) {
            return Err(PolicyError::PercentOutOfRange {
                name: "take_profit_pct",
                value: self.take_profit_pct,
            });
        }
        if !(self.stop_loss_offset_pct.is_finite() && self.stop_loss_offset_pct > 0.0) {
            return Err(PolicyError::PercentOutOfRange {
                name: "stop_loss_offset_pct",
                value: self.stop_loss_offset_pct,
            });
        }
        if !(self.emergency_fund_multiple.is_finite() && self.emergency_fund_multiple > 0.0) {
            return Err(PolicyError::PercentOutOfRange {
                name: "emergency_fund_multiple",
                value: self.emergency_fund_multiple,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("entry splits sum to {sum}, expected 1.0")]
    SplitsDoNotSumToOne { sum: f64 },

    #[error("entry split {index} is {value}, expected a positive fraction")]
    NonPositiveSplit { index: usize, value: f64 },

    #[error("adjustment factor {value} must be positive and finite")]
    NonPositiveAdjustment { value: f64 },

    #[error("leverage tier {tier} must be greater than 1")]
    LeverageTierTooLow { tier: u32 },

    #[error("{name} is {value}, expected a positive finite value")]
    PercentOutOfRange { name: &'static str, value: f64 },
}
