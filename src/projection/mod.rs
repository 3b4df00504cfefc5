//! Projection engine: day-stepping core, monthly aggregation, and summary

mod engine;
mod records;
mod state;
mod summary;

pub use engine::{simulate, SimulationEngine};
pub use records::{aggregate_monthly, DailyRecord, MonthlyRecord, SimulationResult};
pub use state::SimulationState;
pub use summary::{summarize, Summary};
