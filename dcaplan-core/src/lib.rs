//! DCAPlan Core — position spec, ladder policy, plan computation, text report.
//!
//! This crate contains everything that is not presentation:
//! - Domain types (position spec, entry tranches, summary, stop-loss, emergency fund)
//! - `LadderPolicy` — the fixed policy constants, named and validated
//!   independently of the formula code
//! - `PositionPlanner` — the pure four-tranche DCA computation
//! - A plain-text report renderer shared by the CLI and other front-ends

pub mod domain;
pub mod planner;
pub mod policy;
pub mod report;

pub use domain::{
    EmergencyFundAdvice, EntryTranche, PlanResult, PlanSummary, PositionSpec, Side, StopLossPlan,
};
pub use planner::{PlanError, PositionPlanner};
pub use policy::{LadderPolicy, PolicyError, TRANCHE_COUNT};
