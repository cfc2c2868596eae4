//! Entry tranche — one of the four scheduled partial entries.

use serde::{Deserialize, Serialize};

/// A single scheduled entry with its risk metrics.
///
/// `avg_entry_so_far` is the running mean over tranches `1..=index`, so the
/// value recorded on tranche 2 differs from the final plan average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryTranche {
    /// 1-based tranche number.
    pub index: usize,
    /// Share of the portfolio entered at this tranche.
    pub percent_of_portfolio: f64,
    pub entry_price: f64,
    /// `portfolio_size * percent_of_portfolio`, in quote currency.
    pub allocation: f64,
    /// `allocation / entry_price`, in base units.
    pub quantity: f64,
    pub avg_entry_so_far: f64,
    /// Liquidation price per leverage tier, ascending tier order.
    pub liquidation_prices: Vec<(u32, f64)>,
    pub take_profit_price: f64,
}

impl EntryTranche {
    /// Liquidation price at a given leverage tier, if that tier is planned.
    pub fn liquidation_at(&self, leverage: u32) -> Option<f64> {
        self.liquidation_prices
            .iter()
            .find(|(l, _)| *l == leverage)
            .map(|(_, price)| *price)
    }

    /// Portfolio share as a whole-number percent for display.
    pub fn percent_display(&self) -> f64 {
        self.percent_of_portfolio * 100.0
    }
}
