//! Scenario runner for batch projections
//!
//! Holds a base parameter set and runs many variations of it without the
//! caller re-specifying every field. Batch runs execute in parallel; each
//! run owns its own state, so results are identical to sequential runs.

use rayon::prelude::*;

use crate::error::SimulationError;
use crate::params::Parameters;
use crate::projection::{simulate, SimulationResult};

/// Pre-configured runner for batches of related projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(Parameters::default());
/// let results = runner.run_horizons(&[365, 780, 1560])?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_params: Parameters,
}

impl ScenarioRunner {
    /// Create a runner around a base parameter set
    pub fn new(base_params: Parameters) -> Self {
        Self { base_params }
    }

    /// Run a single projection of the base parameters
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        simulate(&self.base_params)
    }

    /// Run one projection per parameter set, in parallel
    ///
    /// Output order matches input order. The first failing set aborts the
    /// whole batch; partial batches are never returned.
    pub fn run_batch(
        &self,
        parameter_sets: &[Parameters],
    ) -> Result<Vec<SimulationResult>, SimulationError> {
        log::info!("running batch of {} projections", parameter_sets.len());
        parameter_sets.par_iter().map(simulate).collect()
    }

    /// Sweep the base parameters across several horizons
    pub fn run_horizons(
        &self,
        horizons: &[u32],
    ) -> Result<Vec<SimulationResult>, SimulationError> {
        let sets: Vec<Parameters> = horizons
            .iter()
            .map(|&horizon_days| Parameters {
                horizon_days,
                ..self.base_params.clone()
            })
            .collect();
        self.run_batch(&sets)
    }

    /// Base parameters for inspection
    pub fn base_params(&self) -> &Parameters {
        &self.base_params
    }

    /// Mutable base parameters for customization between runs
    pub fn base_params_mut(&mut self) -> &mut Parameters {
        &mut self.base_params
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_matches_individual_runs() {
        let runner = ScenarioRunner::default();
        let sets = vec![
            Parameters {
                horizon_days: 52,
                ..Parameters::default()
            },
            Parameters {
                horizon_days: 520,
                ..Parameters::default()
            },
        ];
        let batch = runner.run_batch(&sets).unwrap();
        assert_eq!(batch.len(), 2);
        for (params, result) in sets.iter().zip(&batch) {
            assert_eq!(result, &simulate(params).unwrap());
        }
    }

    #[test]
    fn horizon_sweep_preserves_order() {
        let runner = ScenarioRunner::default();
        let results = runner.run_horizons(&[26, 260, 780]).unwrap();
        let days: Vec<u32> = results.iter().map(|r| r.summary.days_simulated).collect();
        assert_eq!(days, vec![26, 260, 780]);
    }

    #[test]
    fn invalid_set_fails_the_whole_batch() {
        let runner = ScenarioRunner::default();
        let sets = vec![
            Parameters::default(),
            Parameters {
                unit_value: 0,
                ..Parameters::default()
            },
        ];
        assert!(runner.run_batch(&sets).is_err());
    }
}
