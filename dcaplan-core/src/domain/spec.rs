//! Position spec — the immutable input to one planning run.

use serde::{Deserialize, Serialize};

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Long,
    Short,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Long => "Long",
            Side::Short => "Short",
        }
    }

    pub fn toggled(self) -> Side {
        match self {
            Side::Long => Side::Short,
            Side::Short => Side::Long,
        }
    }

    /// Parse a user-supplied direction, case-insensitive.
    pub fn parse(s: &str) -> Option<Side> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Some(Side::Long),
            "short" => Some(Side::Short),
            _ => None,
        }
    }
}

/// Input parameters for one planning run.
///
/// `max_percent_diff` is range-checked at compute time but consulted by no
/// formula; it is carried for parity with the original input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSpec {
    /// Display identifier, e.g. "BTC".
    pub coin: String,
    /// Total capital in quote currency.
    pub portfolio_size: f64,
    /// Market price at planning time.
    pub current_price: f64,
    pub side: Side,
    /// Allowed deviation, percent in [1, 100].
    #[serde(default = "default_max_percent_diff")]
    pub max_percent_diff: f64,
}

fn default_max_percent_diff() -> f64 {
    25.0
}

impl PositionSpec {
    /// Coin ticker normalized for display.
    pub fn coin_display(&self) -> String {
        self.coin.trim().to_uppercase()
    }
}
