//! Scenario runner for batch forecasts
//!
//! Holds one engine configuration and runs many parameter sets against it,
//! optionally in parallel.

use rayon::prelude::*;

use crate::error::ForecastError;
use crate::forecast::{ForecastConfig, ForecastEngine, ForecastResult};
use crate::params::{ForecastParams, NamedScenario};

/// Outcome of one named scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ForecastResult, ForecastError>,
}

/// Batch runner sharing one engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for growth in [5.0, 10.0, 15.0] {
///     let params = ForecastParams { growth_rate: growth, ..Default::default() };
///     let result = runner.run(&params)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ForecastEngine,
}

impl ScenarioRunner {
    /// Create runner with the default engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a custom engine configuration
    pub fn with_config(config: ForecastConfig) -> Self {
        Self {
            engine: ForecastEngine::new(config),
        }
    }

    /// Run a single forecast
    pub fn run(&self, params: &ForecastParams) -> Result<ForecastResult, ForecastError> {
        self.engine.forecast(params)
    }

    /// Run many parameter sets in parallel; output order matches input order
    pub fn run_batch(&self, params: &[ForecastParams]) -> Vec<Result<ForecastResult, ForecastError>> {
        params.par_iter().map(|p| self.engine.forecast(p)).collect()
    }

    /// Run named scenarios in parallel, keeping each name with its result
    pub fn run_named(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .map(|s| ScenarioOutcome {
                name: s.name.clone(),
                result: self.engine.forecast(&s.params),
            })
            .collect()
    }

    pub fn config(&self) -> &ForecastConfig {
        self.engine.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let params: Vec<_> = [12, 18, 24, 30, 36]
            .iter()
            .map(|&months| ForecastParams { months, ..Default::default() })
            .collect();

        let results = runner.run_batch(&params);
        assert_eq!(results.len(), 5);
        for (p, r) in params.iter().zip(&results) {
            assert_eq!(r.as_ref().unwrap().len(), p.months as usize);
        }
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let params: Vec<_> = [5.0, 10.0, 15.0]
            .iter()
            .map(|&growth_rate| ForecastParams {
                months: 24,
                growth_rate,
                enable_growth_drop: true,
                ..Default::default()
            })
            .collect();

        let batch = runner.run_batch(&params);
        for (p, r) in params.iter().zip(batch) {
            assert_eq!(r, runner.run(p));
        }

        // Higher growth should end with more users
        let finals: Vec<f64> = runner
            .run_batch(&params)
            .into_iter()
            .map(|r| r.unwrap().summary().final_users)
            .collect();
        assert!(finals[2] > finals[1] && finals[1] > finals[0]);
    }

    #[test]
    fn test_named_scenarios_report_invalid_horizon() {
        let runner = ScenarioRunner::with_config(ForecastConfig {
            floor_users_at_zero: true,
            ..Default::default()
        });
        let scenarios = vec![
            NamedScenario { name: "ok".into(), params: ForecastParams::default() },
            NamedScenario {
                name: "broken".into(),
                params: ForecastParams { months: 0, ..Default::default() },
            },
        ];

        let outcomes = runner.run_named(&scenarios);
        assert_eq!(outcomes[0].name, "ok");
        assert!(outcomes[0].result.is_ok());
        assert_eq!(outcomes[1].name, "broken");
        assert_eq!(
            outcomes[1].result,
            Err(ForecastError::InvalidHorizon { months: 0 })
        );
        assert!(runner.config().floor_users_at_zero);
    }
}
