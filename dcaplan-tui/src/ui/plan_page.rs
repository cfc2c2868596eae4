//! Plan page — the computed ladder rendered as styled text.
//!
//! Mirrors the core text report (two decimals for prices and allocations,
//! four for quantities) with direction and risk coloring on top.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use dcaplan_core::PlanResult;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(plan) = &app.plan else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No plan yet. Fill in the sidebar and press Enter.",
            theme::muted(),
        )));
        f.render_widget(placeholder, area);
        return;
    };

    let para = Paragraph::new(plan_lines(plan)).scroll((app.page_scroll, 0));
    f.render_widget(para, area);
}

fn plan_lines(plan: &PlanResult) -> Vec<Line<'static>> {
    let side = plan.spec.side;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", plan.spec.coin_display()),
            theme::accent().add_modifier(Modifier::BOLD),
        ),
        Span::styled(side.label().to_string(), theme::side_style(side)),
    ]));
    lines.push(Line::from(""));

    for tranche in &plan.entries {
        lines.push(Line::from(Span::styled(
            format!("Entry {} ({:.0}%)", tranche.index, tranche.percent_display()),
            theme::accent().add_modifier(Modifier::BOLD),
        )));
        lines.push(metric("Entry Price", format!("{:.2}", tranche.entry_price), theme::accent()));
        lines.push(metric(
            "Allocation",
            format!("{:.2} USDT", tranche.allocation),
            theme::text_secondary(),
        ));
        lines.push(metric(
            "Avg Entry (so far)",
            format!("{:.2}", tranche.avg_entry_so_far),
            theme::neutral(),
        ));
        lines.push(metric(
            "Quantity",
            format!("{:.4}", tranche.quantity),
            theme::text_secondary(),
        ));

        let mut liq_spans = vec![Span::styled(
            format!("  {:<20}", "Liquidation"),
            theme::muted(),
        )];
        for (tier, price) in &tranche.liquidation_prices {
            liq_spans.push(Span::styled(format!("{tier}x: {price:.2}  "), theme::warning()));
        }
        lines.push(Line::from(liq_spans));

        lines.push(metric(
            "Take Profit",
            format!("{:.2}", tranche.take_profit_price),
            theme::positive(),
        ));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Final Summary",
        theme::accent().add_modifier(Modifier::BOLD),
    )));
    lines.push(metric(
        "Average Entry Price",
        format!("{:.2}", plan.summary.final_avg_entry_price),
        theme::neutral(),
    ));
    lines.push(metric(
        "Total Quantity",
        format!("{:.4}", plan.summary.total_quantity),
        theme::text_secondary(),
    ));
    lines.push(metric(
        "Total Allocation",
        format!("{:.2} USDT", plan.summary.total_allocation),
        theme::text_secondary(),
    ));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Stop Loss",
        theme::accent().add_modifier(Modifier::BOLD),
    )));
    lines.push(metric(
        "Entry 4 Price",
        format!("{:.2}", plan.stop_loss.entry4_price),
        theme::text_secondary(),
    ));
    lines.push(metric(
        "Trigger Price",
        format!("{:.2}", plan.stop_loss.trigger_price),
        theme::negative(),
    ));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<20}", "Condition"), theme::muted()),
        Span::styled(plan.stop_loss.condition_note.clone(), theme::text_secondary()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Emergency Fund",
        theme::accent().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!(
                "Keep {:.2} USDT outside the exchange.",
                plan.emergency_fund.recommended_amount
            ),
            theme::warning(),
        ),
    ]));

    lines
}

fn metric(label: &str, value: String, value_style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<20}"), theme::muted()),
        Span::styled(value, value_style),
    ])
}
