//! Run parameters and the configuration enums for a projection

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Which daily quantity feeds the purchasing cash pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualMode {
    /// The full daily payment accrues to the pool
    GrossPayment,
    /// Only the interest portion accrues; principal is not reinvested
    InterestOnly,
}

/// When newly purchased units start earning income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationRule {
    /// Units bought this month settle only from the next month boundary on
    NextMonth,
    /// Units settle from the day after purchase
    Immediate,
}

/// Immutable inputs for one simulation run
///
/// Monetary fields are integer minor currency units so the purchase rule's
/// floor-division/remainder pair stays exact over long horizons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Acquisition cost of one unit
    pub unit_value: i64,
    /// Gross daily payment received per earning unit
    pub daily_gross_payment: i64,
    /// Interest (yield) portion of the daily payment
    pub daily_interest: i64,
    /// Principal-return portion of the daily payment
    pub daily_principal: i64,
    /// Units owned at day 0
    pub initial_units: u64,
    /// Total days simulated
    pub horizon_days: u32,
    /// Day-bucketing convention for monthly figures
    pub days_per_month: u32,
    /// Cash-accrual policy for the purchasing pool
    pub accrual_mode: AccrualMode,
    /// Income-activation rule for newly purchased units
    pub activation_rule: ActivationRule,
}

impl Default for Parameters {
    /// Default parameter set of the original fleet model: a 6.216M unit
    /// paying 21k/day (7k interest + 14k principal), projected five years
    /// at 26 working days per month.
    fn default() -> Self {
        Self {
            unit_value: 6_216_000,
            daily_gross_payment: 21_000,
            daily_interest: 7_000,
            daily_principal: 14_000,
            initial_units: 1,
            horizon_days: 1_560,
            days_per_month: 26,
            accrual_mode: AccrualMode::GrossPayment,
            activation_rule: ActivationRule::NextMonth,
        }
    }
}

impl Parameters {
    /// Validate the run constraints
    ///
    /// Callers are expected to validate before invoking the engine; the
    /// engine re-checks so a bypassed caller still gets a typed error
    /// instead of a nonsense projection.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.unit_value <= 0 {
            return Err(SimulationError::invalid("unit_value", "must be positive"));
        }
        if self.daily_gross_payment < 0 {
            return Err(SimulationError::invalid(
                "daily_gross_payment",
                "must be non-negative",
            ));
        }
        if self.daily_interest < 0 {
            return Err(SimulationError::invalid(
                "daily_interest",
                "must be non-negative",
            ));
        }
        if self.daily_principal < 0 {
            return Err(SimulationError::invalid(
                "daily_principal",
                "must be non-negative",
            ));
        }
        if self.initial_units < 1 {
            return Err(SimulationError::invalid("initial_units", "must be at least 1"));
        }
        if self.horizon_days < 1 {
            return Err(SimulationError::invalid("horizon_days", "must be at least 1"));
        }
        if self.days_per_month < 1 {
            return Err(SimulationError::invalid(
                "days_per_month",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Cost basis of the starting fleet (reinvestment purchases excluded)
    pub fn initial_investment(&self) -> i64 {
        self.initial_units as i64 * self.unit_value
    }

    /// Number of month buckets the horizon partitions into
    pub fn month_count(&self) -> u32 {
        self.horizon_days.div_ceil(self.days_per_month)
    }

    /// Calendar month of a 1-indexed day under the bucketing convention
    pub fn month_of_day(&self, day: u32) -> u32 {
        day.div_ceil(self.days_per_month)
    }
}
