//! DCAPlan CLI — compute and print a four-tranche position ladder.
//!
//! Commands:
//! - `plan` — build a position spec from flags or a TOML file and print the
//!   text report
//!
//! TOML spec files deserialize straight into `PositionSpec`:
//!
//! ```toml
//! coin = "BTC"
//! portfolio_size = 1000.0
//! current_price = 30000.0
//! side = "Long"
//! max_percent_diff = 25.0
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dcaplan_core::{report, PositionPlanner, PositionSpec, Side};

#[derive(Parser)]
#[command(
    name = "dcaplan",
    about = "DCAPlan CLI — four-tranche DCA position ladder planner"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a four-entry DCA plan and print the text report.
    Plan {
        /// Path to a TOML position spec file (replaces the individual flags).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Coin ticker, display only (e.g. BTC).
        #[arg(long)]
        coin: Option<String>,

        /// Portfolio size in quote currency (USDT).
        #[arg(long)]
        portfolio: Option<f64>,

        /// Current market price.
        #[arg(long)]
        price: Option<f64>,

        /// Position direction: long or short.
        #[arg(long)]
        side: Option<String>,

        /// Max % difference allowed, in [1, 100].
        #[arg(long, default_value_t = 25.0)]
        max_diff: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            config,
            coin,
            portfolio,
            price,
            side,
            max_diff,
        } => run_plan(config, coin, portfolio, price, side, max_diff),
    }
}

fn run_plan(
    config: Option<PathBuf>,
    coin: Option<String>,
    portfolio: Option<f64>,
    price: Option<f64>,
    side: Option<String>,
    max_diff: f64,
) -> Result<()> {
    let spec = match config {
        Some(path) => {
            if coin.is_some() || portfolio.is_some() || price.is_some() || side.is_some() {
                bail!("--config replaces --coin/--portfolio/--price/--side; pass one or the other");
            }
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read spec file {}", path.display()))?;
            toml::from_str::<PositionSpec>(&content)
                .with_context(|| format!("invalid spec file {}", path.display()))?
        }
        None => spec_from_flags(coin, portfolio, price, side, max_diff)?,
    };

    let plan = PositionPlanner::compute(&spec)?;
    print!("{}", report::render_plan(&plan));
    Ok(())
}

fn spec_from_flags(
    coin: Option<String>,
    portfolio: Option<f64>,
    price: Option<f64>,
    side: Option<String>,
    max_diff: f64,
) -> Result<PositionSpec> {
    let Some(coin) = coin else {
        bail!("--coin is required (or use --config)");
    };
    let Some(portfolio_size) = portfolio else {
        bail!("--portfolio is required (or use --config)");
    };
    let Some(current_price) = price else {
        bail!("--price is required (or use --config)");
    };
    let Some(side_str) = side else {
        bail!("--side is required (or use --config)");
    };
    let Some(side) = Side::parse(&side_str) else {
        bail!("--side must be 'long' or 'short', got '{side_str}'");
    };

    Ok(PositionSpec {
        coin,
        portfolio_size,
        current_price,
        side,
        max_percent_diff: max_diff,
    })
}
