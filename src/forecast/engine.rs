//! Core forecast engine for monthly user, revenue and profit projections

use log::debug;

use super::adjustments::{AdjustmentSchedule, PolicyAdjustment};
use super::rows::{ForecastResult, ForecastRow};
use super::state::ForecastState;
use crate::error::ForecastError;
use crate::params::ForecastParams;

/// Engine behaviour that is not part of the business assumptions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastConfig {
    /// Clamp active users at zero after every month's update.
    /// Off by default: churn overshoot is reported as a negative user count.
    pub floor_users_at_zero: bool,

    /// Adjustments applied after the flag-derived ones
    pub extra_adjustments: Vec<PolicyAdjustment>,
}

/// Main forecast engine
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

/// Forecast with the default engine configuration
pub fn forecast(params: &ForecastParams) -> Result<ForecastResult, ForecastError> {
    ForecastEngine::default().forecast(params)
}

impl ForecastEngine {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Run the month-by-month simulation
    ///
    /// Returns exactly `params.months` rows, months 1 through `params.months`.
    /// Fails with [`ForecastError::InvalidHorizon`] when the horizon is not a
    /// positive month count that fits in a `u32`; no rows are produced then.
    pub fn forecast(&self, params: &ForecastParams) -> Result<ForecastResult, ForecastError> {
        let horizon = validate_horizon(params.months)?;
        let schedule = AdjustmentSchedule::from_params(params, &self.config.extra_adjustments);

        debug!(
            "forecast start: {} months, {} users, {} adjustments",
            horizon,
            params.starting_users,
            schedule.adjustments().len()
        );

        let mut result = ForecastResult::with_capacity(horizon as usize);
        let mut state = ForecastState::starting(params.starting_users);

        for _month in 1..=horizon {
            state.advance_month();
            let row = self.calculate_month(params, &schedule, &mut state);
            result.add_row(row);
        }

        debug!(
            "forecast done: final users {:.2}, total profit {:.2}",
            state.active_users,
            result.rows.iter().map(|r| r.profit).sum::<f64>()
        );

        Ok(result)
    }

    /// Calculate flows for a single month and update state
    fn calculate_month(
        &self,
        params: &ForecastParams,
        schedule: &AdjustmentSchedule,
        state: &mut ForecastState,
    ) -> ForecastRow {
        let month = state.month;

        // Rates in effect this month
        let growth_rate = schedule.effective_growth_rate(params, month);
        let revenue_per_user = schedule.effective_revenue_per_user(params, month);

        let (new_users, churned_users) = state.apply_flows(growth_rate, params.churn_rate);
        if self.config.floor_users_at_zero && state.active_users < 0.0 {
            state.active_users = 0.0;
        }

        // Money flows use the updated user count
        let active_users = state.active_users;
        let revenue = active_users * revenue_per_user;
        let cost = active_users * params.cost_per_user + params.fixed_overhead;
        let profit = revenue - cost;

        ForecastRow {
            month,
            active_users,
            revenue,
            cost,
            profit,
            new_users,
            churned_users,
            effective_growth_rate: growth_rate,
            effective_revenue_per_user: revenue_per_user,
        }
    }
}

fn validate_horizon(months: i64) -> Result<u32, ForecastError> {
    match u32::try_from(months) {
        Ok(horizon) if horizon > 0 => Ok(horizon),
        _ => Err(ForecastError::InvalidHorizon { months }),
    }
}
