//! Mutable simulation state for one run

use crate::params::Parameters;

/// Fleet and cash counters advanced one day at a time
///
/// Each run owns one of these; nothing here is shared across runs, which is
/// what makes concurrent runs for different parameter sets safe.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current simulated day (1-indexed, 0 before the first step)
    pub day: u32,

    /// Calendar month of the current day
    pub month: u32,

    /// Units owned, including units not yet earning
    pub total_units: u64,

    /// Units whose payments settle today
    pub earning_units: u64,

    /// Uninvested cash available for purchases
    pub cash_pool: i64,

    /// Sum of all gross payments realized so far
    pub cumulative_payment: i64,

    /// Cost of all reinvestment purchases so far
    pub cumulative_investment: i64,
}

impl SimulationState {
    /// Initialize state at day 0 from validated parameters
    pub fn from_params(params: &Parameters) -> Self {
        Self {
            day: 0,
            month: 1,
            total_units: params.initial_units,
            earning_units: params.initial_units,
            cash_pool: 0,
            cumulative_payment: 0,
            cumulative_investment: 0,
        }
    }

    /// Net cumulative payment (gross payments less reinvestment cost)
    pub fn cumulative_net_payment(&self) -> i64 {
        self.cumulative_payment - self.cumulative_investment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_parameters() {
        let params = Parameters {
            initial_units: 3,
            ..Parameters::default()
        };
        let state = SimulationState::from_params(&params);
        assert_eq!(state.day, 0);
        assert_eq!(state.month, 1);
        assert_eq!(state.total_units, 3);
        assert_eq!(state.earning_units, 3);
        assert_eq!(state.cash_pool, 0);
        assert_eq!(state.cumulative_net_payment(), 0);
    }
}
