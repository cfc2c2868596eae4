//! Plain-text plan report.
//!
//! Sectioned rendering of a `PlanResult` for the CLI and any other
//! text-oriented front-end. Prices and allocations are formatted to two
//! decimals, quantities to four.

use std::fmt::Write;

use crate::domain::PlanResult;

/// Render the full plan as sectioned text.
pub fn render_plan(plan: &PlanResult) -> String {
    let mut out = String::new();
    let spec = &plan.spec;

    let _ = writeln!(
        out,
        "Coin: {} | Position: {}",
        spec.coin_display(),
        spec.side.label()
    );
    let _ = writeln!(out);

    for tranche in &plan.entries {
        let _ = writeln!(
            out,
            "Entry {} ({:.0}%)",
            tranche.index,
            tranche.percent_display()
        );
        let _ = writeln!(out, "  Entry Price:            {:.2}", tranche.entry_price);
        let _ = writeln!(out, "  Allocation:             {:.2} USDT", tranche.allocation);
        let _ = writeln!(
            out,
            "  Average Entry (so far): {:.2}",
            tranche.avg_entry_so_far
        );
        let _ = writeln!(out, "  Quantity:               {:.4}", tranche.quantity);
        let _ = writeln!(out, "  Liquidation Prices:");
        for (tier, price) in &tranche.liquidation_prices {
            let _ = writeln!(out, "    {tier}x: {price:.2}");
        }
        let _ = writeln!(
            out,
            "  Take Profit:            {:.2}",
            tranche.take_profit_price
        );
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Final Summary");
    let _ = writeln!(
        out,
        "  Average Entry Price:    {:.2}",
        plan.summary.final_avg_entry_price
    );
    let _ = writeln!(
        out,
        "  Total Quantity:         {:.4}",
        plan.summary.total_quantity
    );
    let _ = writeln!(
        out,
        "  Total Allocation Used:  {:.2} USDT",
        plan.summary.total_allocation
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Stop Loss");
    let _ = writeln!(
        out,
        "  Entry 4 Price:          {:.2}",
        plan.stop_loss.entry4_price
    );
    let _ = writeln!(
        out,
        "  Trigger Price:          {:.2}",
        plan.stop_loss.trigger_price
    );
    let _ = writeln!(out, "  Condition: {}", plan.stop_loss.condition_note);
    let _ = writeln!(out);

    let _ = writeln!(out, "Emergency Fund");
    let _ = writeln!(
        out,
        "  Keep {:.2} USDT separately as an emergency fund outside the exchange.",
        plan.emergency_fund.recommended_amount
    );

    out
}
