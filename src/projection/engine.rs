//! Core day-stepping engine
//!
//! One forward pass over the horizon produces the daily series; the monthly
//! series and summary are derived from it. The pass is a pure function of
//! the parameters: no clock, no randomness, no shared state across runs.

use crate::error::SimulationError;
use crate::params::{AccrualMode, ActivationRule, Parameters};

use super::records::{aggregate_monthly, DailyRecord, SimulationResult};
use super::state::SimulationState;
use super::summary::summarize;

/// Day-stepping simulation engine for one parameter set
pub struct SimulationEngine {
    params: Parameters,
}

impl SimulationEngine {
    /// Create an engine over validated parameters
    pub fn new(params: Parameters) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters this engine projects
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Run the full projection: daily series, monthly buckets, and summary
    pub fn simulate(&self) -> Result<SimulationResult, SimulationError> {
        let daily = self.run_daily();
        let monthly = aggregate_monthly(&daily, self.params.days_per_month)?;
        let summary = summarize(&self.params, &daily)?;
        Ok(SimulationResult {
            params: self.params.clone(),
            daily,
            monthly,
            summary,
        })
    }

    /// Advance day by day over the horizon, emitting one record per day
    ///
    /// Per-day order: month-boundary activation, settlement on the earning
    /// count, accrual into the cash pool, then conversion of any surplus
    /// into whole units. The emitted cash pool is therefore always below
    /// the unit value, and `earning_units` is the count that settled that
    /// day (units bought the same day never appear in it).
    pub fn run_daily(&self) -> Vec<DailyRecord> {
        let params = &self.params;
        let mut state = SimulationState::from_params(params);
        let mut daily = Vec::with_capacity(params.horizon_days as usize);

        for day in 1..=params.horizon_days {
            state.day = day;
            let month = params.month_of_day(day);

            // Units bought in a prior month start settling at the boundary
            if month > state.month {
                state.earning_units = state.total_units;
                state.month = month;
            }
            let earning_units = state.earning_units;

            // Settlement
            let count = earning_units as i64;
            let gross_payment = count * params.daily_gross_payment;
            let interest = count * params.daily_interest;
            let principal = count * params.daily_principal;
            state.cumulative_payment += gross_payment;

            // Accrual
            state.cash_pool += match params.accrual_mode {
                AccrualMode::GrossPayment => gross_payment,
                AccrualMode::InterestOnly => interest,
            };

            // Purchase: convert the whole-unit part of the pool, carry the
            // remainder forward
            let mut new_units: u64 = 0;
            if state.cash_pool >= params.unit_value {
                new_units = (state.cash_pool / params.unit_value) as u64;
                state.cash_pool %= params.unit_value;
                state.cumulative_investment += new_units as i64 * params.unit_value;
                state.total_units += new_units;
                if params.activation_rule == ActivationRule::Immediate {
                    state.earning_units += new_units;
                }
            }

            daily.push(DailyRecord {
                day,
                month,
                earning_units,
                gross_payment,
                interest,
                principal,
                new_units,
                cash_pool: state.cash_pool,
                total_units: state.total_units,
                cumulative_payment: state.cumulative_payment,
                cumulative_investment: state.cumulative_investment,
                cumulative_net_payment: state.cumulative_net_payment(),
            });
        }

        daily
    }
}

/// Run a full projection for one parameter set
///
/// Validation, the daily pass, aggregation, and summary composed; either
/// every output is produced or a single typed error comes back.
pub fn simulate(params: &Parameters) -> Result<SimulationResult, SimulationError> {
    SimulationEngine::new(params.clone())?.simulate()
}
