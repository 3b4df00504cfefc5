//! Fleet Reinvestment - Day-stepped projection engine for reinvestment-funded fleet growth
//!
//! This library provides:
//! - Deterministic day-by-day projection of an income-generating unit fleet
//! - Whole-unit purchase logic funded by a configurable cash-accrual policy
//! - Monthly aggregation and run-level summary metrics
//! - Batch scenario execution and CSV/report rendering of finished runs

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::SimulationError;
pub use params::{AccrualMode, ActivationRule, Parameters};
pub use projection::{
    simulate, DailyRecord, MonthlyRecord, SimulationEngine, SimulationResult, Summary,
};
pub use scenario::ScenarioRunner;
