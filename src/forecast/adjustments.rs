//! Step-change policies applied to rates from a given month onward

use crate::params::ForecastParams;
use serde::{Deserialize, Serialize};

/// Month after which the revenue boost kicks in
pub const REVENUE_BOOST_AFTER_MONTH: u32 = 6;

/// Revenue-per-user multiplier once the boost is active
pub const REVENUE_BOOST_MULTIPLIER: f64 = 1.1;

/// Month after which the growth drop kicks in
pub const GROWTH_DROP_AFTER_MONTH: u32 = 12;

/// Growth rate multiplier once the drop is active
pub const GROWTH_DROP_MULTIPLIER: f64 = 0.5;

/// Which per-month rate an adjustment scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdjustedRate {
    GrowthRate,
    RevenuePerUser,
}

/// A permanent multiplier on one rate, active for every month after `after_month`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAdjustment {
    pub target: AdjustedRate,
    pub after_month: u32,
    pub multiplier: f64,
}

impl PolicyAdjustment {
    pub const fn new(target: AdjustedRate, after_month: u32, multiplier: f64) -> Self {
        Self { target, after_month, multiplier }
    }

    /// +10% revenue per user from month 7
    pub const fn revenue_boost() -> Self {
        Self::new(AdjustedRate::RevenuePerUser, REVENUE_BOOST_AFTER_MONTH, REVENUE_BOOST_MULTIPLIER)
    }

    /// Growth halved from month 13
    pub const fn growth_drop() -> Self {
        Self::new(AdjustedRate::GrowthRate, GROWTH_DROP_AFTER_MONTH, GROWTH_DROP_MULTIPLIER)
    }

    /// Strictly after the threshold month, never on it
    pub fn is_active(&self, month: u32) -> bool {
        month > self.after_month
    }
}

/// Ordered list of adjustments for one forecast run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustmentSchedule {
    adjustments: Vec<PolicyAdjustment>,
}

impl AdjustmentSchedule {
    pub fn new(adjustments: Vec<PolicyAdjustment>) -> Self {
        Self { adjustments }
    }

    /// Build the schedule implied by the parameter flags, followed by `extra`
    pub fn from_params(params: &ForecastParams, extra: &[PolicyAdjustment]) -> Self {
        let mut adjustments = Vec::with_capacity(2 + extra.len());

        if params.enable_revenue_boost {
            adjustments.push(PolicyAdjustment::revenue_boost());
        }
        if params.enable_growth_drop {
            adjustments.push(PolicyAdjustment::growth_drop());
        }
        adjustments.extend_from_slice(extra);

        Self { adjustments }
    }

    /// Apply every active adjustment on `target` to `base`, in list order
    pub fn apply(&self, target: AdjustedRate, base: f64, month: u32) -> f64 {
        self.adjustments
            .iter()
            .filter(|a| a.target == target && a.is_active(month))
            .fold(base, |value, a| value * a.multiplier)
    }

    /// Growth rate (percent) in effect for `month`
    pub fn effective_growth_rate(&self, params: &ForecastParams, month: u32) -> f64 {
        self.apply(AdjustedRate::GrowthRate, params.growth_rate, month)
    }

    /// Revenue per user in effect for `month`
    pub fn effective_revenue_per_user(&self, params: &ForecastParams, month: u32) -> f64 {
        self.apply(AdjustedRate::RevenuePerUser, params.revenue_per_user, month)
    }

    pub fn adjustments(&self) -> &[PolicyAdjustment] {
        &self.adjustments
    }

    pub fn is_empty(&self) -> bool {
        self.adjustments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged_params() -> ForecastParams {
        ForecastParams {
            growth_rate: 20.0,
            revenue_per_user: 10.0,
            enable_revenue_boost: true,
            enable_growth_drop: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_build_schedule() {
        let schedule = AdjustmentSchedule::from_params(&flagged_params(), &[]);
        assert_eq!(
            schedule.adjustments(),
            &[PolicyAdjustment::revenue_boost(), PolicyAdjustment::growth_drop()]
        );

        let none = AdjustmentSchedule::from_params(&ForecastParams::default(), &[]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_growth_drop_edge() {
        let params = flagged_params();
        let schedule = AdjustmentSchedule::from_params(&params, &[]);

        assert_eq!(schedule.effective_growth_rate(&params, 12), 20.0);
        assert_eq!(schedule.effective_growth_rate(&params, 13), 20.0 * 0.5);
        assert_eq!(schedule.effective_growth_rate(&params, 36), 20.0 * 0.5);
    }

    #[test]
    fn test_revenue_boost_edge() {
        let params = flagged_params();
        let schedule = AdjustmentSchedule::from_params(&params, &[]);

        assert_eq!(schedule.effective_revenue_per_user(&params, 1), 10.0);
        assert_eq!(schedule.effective_revenue_per_user(&params, 6), 10.0);
        assert_eq!(schedule.effective_revenue_per_user(&params, 7), 10.0 * 1.1);
        assert_eq!(schedule.effective_revenue_per_user(&params, 24), 10.0 * 1.1);
    }

    #[test]
    fn test_extra_adjustments_compose() {
        let params = flagged_params();
        let extra = [PolicyAdjustment::new(AdjustedRate::GrowthRate, 24, 0.5)];
        let schedule = AdjustmentSchedule::from_params(&params, &extra);

        assert_eq!(schedule.effective_growth_rate(&params, 20), 10.0);
        assert_eq!(schedule.effective_growth_rate(&params, 25), 5.0);
        // Revenue untouched by a growth adjustment
        assert_eq!(schedule.effective_revenue_per_user(&params, 25), 10.0 * 1.1);
    }
}
