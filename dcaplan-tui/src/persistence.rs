//! Form persistence — JSON save/load across restarts.
//!
//! Only the input form is persisted; computed plans never touch disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use dcaplan_core::Side;

use crate::app::{AppState, FormState};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub coin: String,
    pub portfolio_input: String,
    pub price_input: String,
    pub side: Side,
    pub max_percent_diff: f64,
}

impl Default for PersistedState {
    fn default() -> Self {
        let form = FormState::default();
        Self {
            coin: form.coin,
            portfolio_input: form.portfolio_input,
            price_input: form.price_input,
            side: form.side,
            max_percent_diff: form.max_percent_diff,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        coin: app.form.coin.clone(),
        portfolio_input: app.form.portfolio_input.clone(),
        price_input: app.form.price_input.clone(),
        side: app.form.side,
        max_percent_diff: app.form.max_percent_diff,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.form.coin = state.coin;
    app.form.portfolio_input = state.portfolio_input;
    app.form.price_input = state.price_input;
    app.form.side = state.side;
    app.form.max_percent_diff = state.max_percent_diff.clamp(1.0, 100.0);
}
