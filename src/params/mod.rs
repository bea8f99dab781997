//! Forecast parameters and form-style input handling

pub mod loader;

pub use loader::{load_params, load_params_from_reader, load_scenarios, load_scenarios_from_reader, NamedScenario};

use serde::{Deserialize, Serialize};

/// Shortest horizon the input form allows
pub const MIN_INPUT_MONTHS: i64 = 12;

/// Longest horizon the input form allows
pub const MAX_INPUT_MONTHS: i64 = 36;

/// Assumptions for a single forecast run
///
/// Rates are percentages (10.0 means 10% per month). Money fields are in
/// whatever currency the caller works in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastParams {
    /// Number of months to simulate
    #[serde(default = "default_months")]
    pub months: i64,

    /// User count at month 0
    #[serde(default = "default_starting_users")]
    pub starting_users: f64,

    /// Monthly growth as a percentage of active users
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,

    /// Monthly churn as a percentage of active users
    #[serde(default = "default_churn_rate")]
    pub churn_rate: f64,

    /// Revenue per active user per month
    #[serde(default = "default_revenue_per_user")]
    pub revenue_per_user: f64,

    /// Variable cost per active user per month
    #[serde(default = "default_cost_per_user")]
    pub cost_per_user: f64,

    /// Cost incurred every month regardless of users
    #[serde(default = "default_fixed_overhead")]
    pub fixed_overhead: f64,

    /// 10% revenue-per-user increase from month 7
    #[serde(default)]
    pub enable_revenue_boost: bool,

    /// Growth rate halved from month 13
    #[serde(default)]
    pub enable_growth_drop: bool,
}

fn default_months() -> i64 { 12 }
fn default_starting_users() -> f64 { 100.0 }
fn default_growth_rate() -> f64 { 10.0 }
fn default_churn_rate() -> f64 { 2.0 }
fn default_revenue_per_user() -> f64 { 10.0 }
fn default_cost_per_user() -> f64 { 3.0 }
fn default_fixed_overhead() -> f64 { 1000.0 }

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            months: default_months(),
            starting_users: default_starting_users(),
            growth_rate: default_growth_rate(),
            churn_rate: default_churn_rate(),
            revenue_per_user: default_revenue_per_user(),
            cost_per_user: default_cost_per_user(),
            fixed_overhead: default_fixed_overhead(),
            enable_revenue_boost: false,
            enable_growth_drop: false,
        }
    }
}

impl ForecastParams {
    /// Apply the input form's range rules
    ///
    /// Months are held to [12, 36] and every numeric field is floored at zero.
    /// The engine itself never does this; it is a caller-side policy.
    pub fn clamped_for_input(&self) -> Self {
        Self {
            months: self.months.clamp(MIN_INPUT_MONTHS, MAX_INPUT_MONTHS),
            starting_users: self.starting_users.max(0.0),
            growth_rate: self.growth_rate.max(0.0),
            churn_rate: self.churn_rate.max(0.0),
            revenue_per_user: self.revenue_per_user.max(0.0),
            cost_per_user: self.cost_per_user.max(0.0),
            fixed_overhead: self.fixed_overhead.max(0.0),
            ..self.clone()
        }
    }

    /// Whether clamping for input would change anything
    pub fn needs_clamping(&self) -> bool {
        self.clamped_for_input() != *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let p = ForecastParams::default();
        assert_eq!(p.months, 12);
        assert_eq!(p.starting_users, 100.0);
        assert_eq!(p.growth_rate, 10.0);
        assert_eq!(p.churn_rate, 2.0);
        assert_eq!(p.fixed_overhead, 1000.0);
        assert!(!p.enable_revenue_boost);
        assert!(!p.enable_growth_drop);
    }

    #[test]
    fn test_clamp_months_to_form_range() {
        let short = ForecastParams { months: 3, ..Default::default() };
        assert_eq!(short.clamped_for_input().months, 12);

        let long = ForecastParams { months: 120, ..Default::default() };
        assert_eq!(long.clamped_for_input().months, 36);

        let ok = ForecastParams { months: 24, ..Default::default() };
        assert_eq!(ok.clamped_for_input().months, 24);
        assert!(!ok.needs_clamping());
    }

    #[test]
    fn test_clamp_negative_fields() {
        let p = ForecastParams {
            starting_users: -5.0,
            churn_rate: -1.0,
            fixed_overhead: -10.0,
            enable_growth_drop: true,
            ..Default::default()
        };
        assert!(p.needs_clamping());

        let clamped = p.clamped_for_input();
        assert_eq!(clamped.starting_users, 0.0);
        assert_eq!(clamped.churn_rate, 0.0);
        assert_eq!(clamped.fixed_overhead, 0.0);
        assert!(clamped.enable_growth_drop);
    }

    #[test]
    fn test_camel_case_json() {
        let p: ForecastParams = serde_json::from_str(
            r#"{"months": 18, "startingUsers": 250, "enableRevenueBoost": true}"#,
        )
        .unwrap();

        assert_eq!(p.months, 18);
        assert_eq!(p.starting_users, 250.0);
        assert!(p.enable_revenue_boost);
        // Unspecified fields fall back to form defaults
        assert_eq!(p.cost_per_user, 3.0);
    }
}
