//! End-to-end planner tests: worked example plus the ladder's invariants
//! under randomized inputs.

use proptest::prelude::*;

use dcaplan_core::{PlanError, PositionPlanner, PositionSpec, Side};

fn spec(portfolio: f64, price: f64, side: Side) -> PositionSpec {
    PositionSpec {
        coin: "BTC".into(),
        portfolio_size: portfolio,
        current_price: price,
        side,
        max_percent_diff: 25.0,
    }
}

#[test]
fn worked_example_matches_published_numbers() {
    let plan = PositionPlanner::compute(&spec(1000.0, 30_000.0, Side::Long)).unwrap();

    let entries: Vec<f64> = plan.entries.iter().map(|t| t.entry_price).collect();
    assert_eq!(entries, vec![30_000.0, 24_000.0, 19_200.0, 15_360.0]);

    assert!((plan.entries[1].avg_entry_so_far - 27_000.0).abs() < 1e-9);
    assert!((plan.entries[2].avg_entry_so_far - 24_400.0).abs() < 1e-9);
    assert!((plan.summary.final_avg_entry_price - 22_140.0).abs() < 1e-9);
    assert!((plan.summary.total_allocation - 1000.0).abs() < 1e-9);
    assert!((plan.stop_loss.trigger_price - 15_283.2).abs() < 1e-6);
    assert!((plan.emergency_fund.recommended_amount - 1800.0).abs() < 1e-12);
}

#[test]
fn invalid_inputs_produce_no_partial_plan() {
    let err = PositionPlanner::compute(&spec(-5.0, 30_000.0, Side::Long)).unwrap_err();
    assert!(matches!(err, PlanError::InvalidPortfolioSize { .. }));

    let err = PositionPlanner::compute(&spec(1000.0, 0.0, Side::Short)).unwrap_err();
    assert!(matches!(err, PlanError::InvalidCurrentPrice { .. }));
}

fn any_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Long), Just(Side::Short)]
}

proptest! {
    #[test]
    fn splits_cover_the_whole_portfolio(
        portfolio in 1.0f64..1e9,
        price in 0.01f64..1e7,
        side in any_side(),
    ) {
        let plan = PositionPlanner::compute(&spec(portfolio, price, side)).unwrap();

        let split_sum: f64 = plan.entries.iter().map(|t| t.percent_of_portfolio).sum();
        prop_assert!((split_sum - 1.0).abs() < 1e-9);

        let rel = (plan.summary.total_allocation - portfolio).abs() / portfolio;
        prop_assert!(rel < 1e-9);
    }

    #[test]
    fn entry_prices_step_with_the_side(
        portfolio in 1.0f64..1e9,
        price in 0.01f64..1e7,
        side in any_side(),
    ) {
        let plan = PositionPlanner::compute(&spec(portfolio, price, side)).unwrap();
        for pair in plan.entries.windows(2) {
            match side {
                Side::Long => prop_assert!(pair[1].entry_price < pair[0].entry_price),
                Side::Short => prop_assert!(pair[1].entry_price > pair[0].entry_price),
            }
        }
    }

    #[test]
    fn liquidation_ordering_across_tiers(
        portfolio in 1.0f64..1e9,
        price in 0.01f64..1e7,
        side in any_side(),
    ) {
        let plan = PositionPlanner::compute(&spec(portfolio, price, side)).unwrap();
        for tranche in &plan.entries {
            let prices: Vec<f64> = tranche.liquidation_prices.iter().map(|(_, p)| *p).collect();
            match side {
                Side::Long => {
                    // Below the average, rising toward it as leverage grows.
                    for pair in prices.windows(2) {
                        prop_assert!(pair[0] < pair[1]);
                    }
                    for p in &prices {
                        prop_assert!(*p < tranche.avg_entry_so_far);
                    }
                }
                Side::Short => {
                    // Above the average, falling toward it as leverage grows.
                    for pair in prices.windows(2) {
                        prop_assert!(pair[0] > pair[1]);
                    }
                    for p in &prices {
                        prop_assert!(*p > tranche.avg_entry_so_far);
                    }
                }
            }
        }
    }

    #[test]
    fn take_profit_lands_on_the_profitable_side(
        portfolio in 1.0f64..1e9,
        price in 0.01f64..1e7,
        side in any_side(),
    ) {
        let plan = PositionPlanner::compute(&spec(portfolio, price, side)).unwrap();
        for tranche in &plan.entries {
            match side {
                Side::Long => prop_assert!(tranche.take_profit_price > tranche.avg_entry_so_far),
                Side::Short => prop_assert!(tranche.take_profit_price < tranche.avg_entry_so_far),
            }
        }
    }

    #[test]
    fn stop_loss_sits_beyond_entry_four(
        portfolio in 1.0f64..1e9,
        price in 0.01f64..1e7,
        side in any_side(),
    ) {
        let plan = PositionPlanner::compute(&spec(portfolio, price, side)).unwrap();
        let entry4 = plan.entries[3].entry_price;
        prop_assert_eq!(plan.stop_loss.entry4_price, entry4);
        match side {
            Side::Long => {
                prop_assert!(plan.stop_loss.trigger_price < entry4);
                prop_assert_eq!(plan.stop_loss.trigger_price, entry4 * 0.995);
            }
            Side::Short => {
                prop_assert!(plan.stop_loss.trigger_price > entry4);
                prop_assert_eq!(plan.stop_loss.trigger_price, entry4 * 1.005);
            }
        }
    }

    #[test]
    fn emergency_fund_is_the_exact_multiple(
        portfolio in 1.0f64..1e9,
        price in 0.01f64..1e7,
        side in any_side(),
    ) {
        let plan = PositionPlanner::compute(&spec(portfolio, price, side)).unwrap();
        prop_assert_eq!(plan.emergency_fund.recommended_amount, portfolio * 1.8);
    }

    #[test]
    fn compute_is_bit_identical_across_calls(
        portfolio in 1.0f64..1e9,
        price in 0.01f64..1e7,
        side in any_side(),
    ) {
        let s = spec(portfolio, price, side);
        let a = PositionPlanner::compute(&s).unwrap();
        let b = PositionPlanner::compute(&s).unwrap();
        prop_assert_eq!(a, b);
    }
}
