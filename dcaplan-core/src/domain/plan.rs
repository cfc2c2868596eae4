//! Plan result — summary, stop-loss, emergency fund, and the full bundle.

use serde::{Deserialize, Serialize};

use crate::domain::{EntryTranche, PositionSpec};

/// Totals over the whole ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Mean entry price across all four tranches.
    pub final_avg_entry_price: f64,
    /// Total base units acquired if every tranche fills.
    pub total_quantity: f64,
    /// Sum of tranche allocations; equals the portfolio size up to rounding.
    pub total_allocation: f64,
}

/// Stop-loss trigger derived from the final tranche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopLossPlan {
    pub entry4_price: f64,
    /// 0.5% beyond the fourth entry, against the position direction.
    pub trigger_price: f64,
    /// Human-readable trigger rule (4h candle-close based).
    pub condition_note: String,
}

/// Capital to keep outside the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundAdvice {
    pub recommended_amount: f64,
}

/// Everything a front-end needs to render one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub spec: PositionSpec,
    /// Always exactly four tranches, ordered 1..=4.
    pub entries: Vec<EntryTranche>,
    pub summary: PlanSummary,
    pub stop_loss: StopLossPlan,
    pub emergency_fund: EmergencyFundAdvice,
}
