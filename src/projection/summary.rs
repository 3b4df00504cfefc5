//! Scalar run-level metrics derived from a finished daily series

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::params::Parameters;

use super::records::DailyRecord;

/// Run-level summary figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Units owned at the horizon
    pub final_units: u64,
    /// Uninvested cash at the horizon
    pub final_cash_pool: i64,
    /// Final fleet value plus final cash
    pub accumulated_capital: i64,
    /// Cost basis of the starting fleet only
    pub total_invested_initial: i64,
    /// Accumulated capital less initial investment
    pub total_gain: i64,
    /// Total gain over initial investment, in percent
    pub total_return_pct: f64,
    /// Total return scaled to a 365-day year
    pub annualized_return_pct: f64,
    /// Interest realized over the whole run
    pub total_interest: i64,
    /// Days simulated
    pub days_simulated: u32,
    /// Days simulated expressed in 365-day years
    pub years_simulated: f64,
}

/// Derive the run summary from the final daily record and aggregate totals
///
/// The cost basis deliberately counts only the starting fleet: reinvestment
/// purchases are funded from prior earnings, not external capital, so they
/// are not "invested" for return purposes.
pub fn summarize(params: &Parameters, daily: &[DailyRecord]) -> Result<Summary, SimulationError> {
    let last = daily.last().ok_or(SimulationError::EmptyInput)?;

    let total_invested_initial = params.initial_investment();
    if total_invested_initial == 0 {
        return Err(SimulationError::DegenerateInput);
    }

    let accumulated_capital = last.total_units as i64 * params.unit_value + last.cash_pool;
    let total_gain = accumulated_capital - total_invested_initial;
    let total_return_pct = 100.0 * total_gain as f64 / total_invested_initial as f64;

    let days = daily.len() as u32;
    let years = f64::from(days) / 365.0;
    let annualized_return_pct = total_return_pct / years;

    let total_interest = daily.iter().map(|r| r.interest).sum();

    Ok(Summary {
        final_units: last.total_units,
        final_cash_pool: last.cash_pool,
        accumulated_capital,
        total_invested_initial,
        total_gain,
        total_return_pct,
        annualized_return_pct,
        total_interest,
        days_simulated: days,
        years_simulated: years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one_day(total_units: u64, cash_pool: i64, interest: i64) -> DailyRecord {
        DailyRecord {
            day: 1,
            month: 1,
            earning_units: total_units,
            gross_payment: 0,
            interest,
            principal: 0,
            new_units: 0,
            cash_pool,
            total_units,
            cumulative_payment: 0,
            cumulative_investment: 0,
            cumulative_net_payment: 0,
        }
    }

    #[test]
    fn empty_series_is_rejected() {
        let params = Parameters::default();
        assert_eq!(summarize(&params, &[]), Err(SimulationError::EmptyInput));
    }

    #[test]
    fn zero_cost_basis_is_degenerate() {
        // Only reachable when validation is bypassed
        let params = Parameters {
            initial_units: 0,
            ..Parameters::default()
        };
        let daily = vec![one_day(1, 0, 0)];
        assert_eq!(
            summarize(&params, &daily),
            Err(SimulationError::DegenerateInput)
        );
    }

    #[test]
    fn capital_and_gain_identities() {
        let params = Parameters {
            unit_value: 1_000,
            initial_units: 2,
            ..Parameters::default()
        };
        let daily = vec![one_day(5, 250, 400)];
        let summary = summarize(&params, &daily).unwrap();
        assert_eq!(summary.total_invested_initial, 2_000);
        assert_eq!(summary.accumulated_capital, 5_250);
        assert_eq!(summary.total_gain, 3_250);
        assert_eq!(summary.total_interest, 400);
        assert_relative_eq!(summary.total_return_pct, 162.5);
    }

    #[test]
    fn annualized_equals_total_at_exactly_one_year() {
        let params = Parameters {
            unit_value: 6_216_000,
            initial_units: 1,
            horizon_days: 365,
            ..Parameters::default()
        };
        let daily: Vec<_> = (1..=365)
            .map(|d| DailyRecord { day: d, ..one_day(1, 100, 10) })
            .collect();
        let summary = summarize(&params, &daily).unwrap();
        assert_eq!(summary.total_invested_initial, 6_216_000);
        assert_eq!(summary.days_simulated, 365);
        assert_relative_eq!(summary.years_simulated, 1.0);
        assert_relative_eq!(summary.annualized_return_pct, summary.total_return_pct);
    }
}
