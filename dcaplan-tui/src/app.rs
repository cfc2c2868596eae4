//! Application state — single-owner, main-thread only.
//!
//! The planner is a fixed-size arithmetic pass, so computation runs inline
//! in the event loop; there is no worker thread.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use dcaplan_core::{PlanResult, PositionPlanner, PositionSpec, Side};

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Sidebar,
    Page,
}

/// Which sidebar field is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Coin,
    Portfolio,
    Price,
    Side,
    MaxDiff,
}

pub const FIELD_COUNT: usize = 5;

impl Field {
    pub fn index(self) -> usize {
        match self {
            Field::Coin => 0,
            Field::Portfolio => 1,
            Field::Price => 2,
            Field::Side => 3,
            Field::MaxDiff => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Field::Coin),
            1 => Some(Field::Portfolio),
            2 => Some(Field::Price),
            3 => Some(Field::Side),
            4 => Some(Field::MaxDiff),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Coin => "Coin Name",
            Field::Portfolio => "Portfolio Size (USDT)",
            Field::Price => "Current Price",
            Field::Side => "Position Type",
            Field::MaxDiff => "Max % Difference",
        }
    }

    pub fn next(self) -> Field {
        Field::from_index((self.index() + 1) % FIELD_COUNT).unwrap()
    }

    pub fn prev(self) -> Field {
        Field::from_index((self.index() + FIELD_COUNT - 1) % FIELD_COUNT).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Timestamped status line shown in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub at: NaiveDateTime,
    pub level: StatusLevel,
    pub text: String,
}

/// The sidebar form. Numeric fields stay as text buffers until a plan is
/// requested, so partially-typed values never fail mid-edit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub coin: String,
    pub portfolio_input: String,
    pub price_input: String,
    pub side: Side,
    pub max_percent_diff: f64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            coin: "BTC".into(),
            portfolio_input: "1000".into(),
            price_input: "30000".into(),
            side: Side::Long,
            max_percent_diff: 25.0,
        }
    }
}

impl FormState {
    /// Build a `PositionSpec` from the buffers. Parse failures are reported
    /// with the field label; domain validation happens in the planner.
    pub fn build_spec(&self) -> Result<PositionSpec, String> {
        let portfolio_size = self
            .portfolio_input
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Portfolio size is not a number: '{}'", self.portfolio_input))?;
        let current_price = self
            .price_input
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Current price is not a number: '{}'", self.price_input))?;
        Ok(PositionSpec {
            coin: self.coin.clone(),
            portfolio_size,
            current_price,
            side: self.side,
            max_percent_diff: self.max_percent_diff,
        })
    }
}

/// All TUI state.
pub struct AppState {
    pub running: bool,
    pub active_pane: Pane,
    pub active_field: Field,
    pub form: FormState,
    pub plan: Option<PlanResult>,
    pub page_scroll: u16,
    pub status_message: Option<StatusMessage>,
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(state_path: PathBuf) -> Self {
        Self {
            running: true,
            active_pane: Pane::Sidebar,
            active_field: Field::Coin,
            form: FormState::default(),
            plan: None,
            page_scroll: 0,
            status_message: None,
            state_path,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.push_status(StatusLevel::Info, text.into());
    }

    pub fn set_warning(&mut self, text: impl Into<String>) {
        self.push_status(StatusLevel::Warning, text.into());
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.push_status(StatusLevel::Error, text.into());
    }

    fn push_status(&mut self, level: StatusLevel, text: String) {
        self.status_message = Some(StatusMessage {
            at: chrono::Local::now().naive_local(),
            level,
            text,
        });
    }

    /// Run the planner on the current form. Invalid input clears the page
    /// so no stale plan is shown next to an error.
    pub fn run_plan(&mut self) {
        let spec = match self.form.build_spec() {
            Ok(spec) => spec,
            Err(msg) => {
                self.plan = None;
                self.set_error(msg);
                return;
            }
        };
        match PositionPlanner::compute(&spec) {
            Ok(plan) => {
                self.set_status(format!(
                    "Plan computed: {} {} over 4 entries",
                    spec.coin_display(),
                    spec.side.label()
                ));
                self.plan = Some(plan);
                self.page_scroll = 0;
            }
            Err(err) => {
                self.plan = None;
                self.set_error(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(PathBuf::from("/tmp/dcaplan-test-state.json"))
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(Field::MaxDiff.next(), Field::Coin);
        assert_eq!(Field::Coin.prev(), Field::MaxDiff);
        assert_eq!(Field::Coin.next(), Field::Portfolio);
    }

    #[test]
    fn default_form_computes_a_plan() {
        let mut app = app();
        app.run_plan();
        let plan = app.plan.expect("default form should be valid");
        assert_eq!(plan.entries.len(), 4);
        assert_eq!(plan.entries[0].entry_price, 30_000.0);
        assert!(matches!(
            app.status_message,
            Some(StatusMessage {
                level: StatusLevel::Info,
                ..
            })
        ));
    }

    #[test]
    fn unparseable_number_reports_error_and_clears_plan() {
        let mut app = app();
        app.run_plan();
        assert!(app.plan.is_some());

        app.form.price_input = "30k".into();
        app.run_plan();
        assert!(app.plan.is_none());
        assert!(matches!(
            app.status_message,
            Some(StatusMessage {
                level: StatusLevel::Error,
                ..
            })
        ));
    }

    #[test]
    fn core_rejection_surfaces_in_status() {
        let mut app = app();
        app.form.portfolio_input = "-100".into();
        app.run_plan();
        assert!(app.plan.is_none());
        let msg = app.status_message.unwrap();
        assert_eq!(msg.level, StatusLevel::Error);
        assert!(msg.text.contains("portfolio size"));
    }

    #[test]
    fn build_spec_carries_slider_value() {
        let mut form = FormState::default();
        form.max_percent_diff = 40.0;
        let spec = form.build_spec().unwrap();
        assert_eq!(spec.max_percent_diff, 40.0);
    }
}
