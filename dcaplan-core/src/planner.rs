//! The planner — pure four-tranche DCA computation.
//!
//! Tranches are processed 1 through 4 in order; each depends on the previous
//! entry price and the cumulative average. No state survives a call, so
//! identical inputs yield bit-identical results.

use thiserror::Error;

use crate::domain::{
    EmergencyFundAdvice, EntryTranche, PlanResult, PlanSummary, PositionSpec, Side, StopLossPlan,
};
use crate::policy::{LadderPolicy, PolicyError, TRANCHE_COUNT};

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("portfolio size must be positive and finite, got {value}")]
    InvalidPortfolioSize { value: f64 },

    #[error("current price must be positive and finite, got {value}")]
    InvalidCurrentPrice { value: f64 },

    #[error("max % difference must be within [1, 100], got {value}")]
    MaxPercentDiffOutOfRange { value: f64 },

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Computes a four-entry DCA plan with liquidation, take-profit, stop-loss,
/// and emergency-fund metrics.
pub struct PositionPlanner;

impl PositionPlanner {
    /// Compute a plan under the default ladder policy.
    pub fn compute(spec: &PositionSpec) -> Result<PlanResult, PlanError> {
        Self::compute_with_policy(spec, &LadderPolicy::default())
    }

    /// Compute a plan under an explicit policy.
    ///
    /// Fails before producing any tranche if the spec or policy is out of
    /// domain; there is no partial output.
    pub fn compute_with_policy(
        spec: &PositionSpec,
        policy: &LadderPolicy,
    ) -> Result<PlanResult, PlanError> {
        policy.validate()?;
        validate_spec(spec)?;

        let factor = policy.adjustment_for(spec.side);

        let mut entry_prices: Vec<f64> = Vec::with_capacity(TRANCHE_COUNT);
        let mut entries: Vec<EntryTranche> = Vec::with_capacity(TRANCHE_COUNT);
        let mut total_allocation = 0.0;
        let mut total_quantity = 0.0;

        for (i, split) in policy.entry_splits.iter().copied().enumerate() {
            let entry_price = match entry_prices.last() {
                None => spec.current_price,
                Some(prev) => prev * factor,
            };
            entry_prices.push(entry_price);

            // Running mean over tranches 1..=i, reported per tranche.
            let avg_entry = entry_prices.iter().sum::<f64>() / entry_prices.len() as f64;

            let liquidation_prices = policy
                .leverage_tiers
                .iter()
                .map(|&tier| (tier, liquidation_price(avg_entry, tier, spec.side)))
                .collect();
            let take_profit = take_profit_price(avg_entry, policy.take_profit_pct, spec.side);

            let allocation = spec.portfolio_size * split;
            let quantity = allocation / entry_price;
            total_allocation += allocation;
            total_quantity += quantity;

            entries.push(EntryTranche {
                index: i + 1,
                percent_of_portfolio: split,
                entry_price,
                allocation,
                quantity,
                avg_entry_so_far: avg_entry,
                liquidation_prices,
                take_profit_price: take_profit,
            });
        }

        let summary = PlanSummary {
            final_avg_entry_price: entries[TRANCHE_COUNT - 1].avg_entry_so_far,
            total_quantity,
            total_allocation,
        };
        let stop_loss = stop_loss_plan(
            entry_prices[TRANCHE_COUNT - 1],
            policy.stop_loss_offset_pct,
            spec.side,
        );
        let emergency_fund = EmergencyFundAdvice {
            recommended_amount: spec.portfolio_size * policy.emergency_fund_multiple,
        };

        Ok(PlanResult {
            spec: spec.clone(),
            entries,
            summary,
            stop_loss,
            emergency_fund,
        })
    }
}

fn validate_spec(spec: &PositionSpec) -> Result<(), PlanError> {
    if !(spec.portfolio_size.is_finite() && spec.portfolio_size > 0.0) {
        return Err(PlanError::InvalidPortfolioSize {
            value: spec.portfolio_size,
        });
    }
    if !(spec.current_price.is_finite() && spec.current_price > 0.0) {
        return Err(PlanError::InvalidCurrentPrice {
            value: spec.current_price,
        });
    }
    if !(spec.max_percent_diff.is_finite()
        && (1.0..=100.0).contains(&spec.max_percent_diff))
    {
        return Err(PlanError::MaxPercentDiffOutOfRange {
            value: spec.max_percent_diff,
        });
    }
    Ok(())
}

/// Liquidation price from the running average entry.
///
/// Long positions liquidate below the average, shorts above it. Tiers <= 1
/// are rejected by `LadderPolicy::validate`, so the short branch cannot
/// divide by zero.
fn liquidation_price(avg_entry: f64, leverage: u32, side: Side) -> f64 {
    let l = f64::from(leverage);
    match side {
        Side::Long => avg_entry * l / (l + 1.0),
        Side::Short => avg_entry * l / (l - 1.0),
    }
}

/// Take-profit target at `percent` beyond the running average.
fn take_profit_price(avg_entry: f64, percent: f64, side: Side) -> f64 {
    match side {
        Side::Long => avg_entry * (1.0 + percent / 100.0),
        Side::Short => avg_entry * (1.0 - percent / 100.0),
    }
}

fn stop_loss_plan(entry4_price: f64, offset_pct: f64, side: Side) -> StopLossPlan {
    let offset = offset_pct / 100.0;
    let (trigger_price, condition_note) = match side {
        Side::Long => (
            entry4_price * (1.0 - offset),
            format!("SL triggers if a 4h candle closes below Entry 4 price by {offset_pct}%."),
        ),
        Side::Short => (
            entry4_price * (1.0 + offset),
            format!("SL triggers if a 4h candle closes above Entry 4 price by {offset_pct}%."),
        ),
    };
    StopLossPlan {
        entry4_price,
        trigger_price,
        condition_note,
    }
}
