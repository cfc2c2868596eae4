//! Domain types for DCAPlan.

pub mod plan;
pub mod spec;
pub mod tranche;

pub use plan::{EmergencyFundAdvice, PlanResult, PlanSummary, StopLossPlan};
pub use spec::{PositionSpec, Side};
pub use tranche::EntryTranche;
