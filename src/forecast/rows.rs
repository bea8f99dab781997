//! Forecast output structures

use serde::{Deserialize, Serialize};

/// A single month of forecast output, unrounded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRow {
    pub month: u32,
    pub active_users: f64,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,

    // Flows and rates actually used this month
    pub new_users: f64,
    pub churned_users: f64,
    pub effective_growth_rate: f64,
    pub effective_revenue_per_user: f64,
}

/// Complete forecast: one row per month in ascending order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub rows: Vec<ForecastRow>,
}

impl ForecastResult {
    pub fn with_capacity(months: usize) -> Self {
        Self {
            rows: Vec::with_capacity(months),
        }
    }

    /// Add a row
    pub fn add_row(&mut self, row: ForecastRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastRow> {
        self.rows.iter()
    }

    /// Row for a 1-based month number
    pub fn month(&self, month: u32) -> Option<&ForecastRow> {
        let idx = (month as usize).checked_sub(1)?;
        self.rows.get(idx)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ForecastSummary {
        let total_revenue: f64 = self.rows.iter().map(|r| r.revenue).sum();
        let total_cost: f64 = self.rows.iter().map(|r| r.cost).sum();
        let total_profit: f64 = self.rows.iter().map(|r| r.profit).sum();

        let final_users = self.rows.last().map(|r| r.active_users).unwrap_or(0.0);
        let break_even_month = self.rows.iter().find(|r| r.profit >= 0.0).map(|r| r.month);

        ForecastSummary {
            total_months: self.rows.len() as u32,
            total_revenue,
            total_cost,
            total_profit,
            final_users,
            break_even_month,
        }
    }
}

impl<'a> IntoIterator for &'a ForecastResult {
    type Item = &'a ForecastRow;
    type IntoIter = std::slice::Iter<'a, ForecastRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Summary statistics for a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub total_months: u32,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    pub final_users: f64,
    /// First month with non-negative profit
    pub break_even_month: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: u32, revenue: f64, cost: f64) -> ForecastRow {
        ForecastRow {
            month,
            active_users: month as f64 * 10.0,
            revenue,
            cost,
            profit: revenue - cost,
            new_users: 0.0,
            churned_users: 0.0,
            effective_growth_rate: 0.0,
            effective_revenue_per_user: 0.0,
        }
    }

    #[test]
    fn test_summary_totals() {
        let mut result = ForecastResult::with_capacity(3);
        result.add_row(row(1, 100.0, 150.0));
        result.add_row(row(2, 200.0, 180.0));
        result.add_row(row(3, 300.0, 210.0));

        let summary = result.summary();
        assert_eq!(summary.total_months, 3);
        assert_eq!(summary.total_revenue, 600.0);
        assert_eq!(summary.total_cost, 540.0);
        assert_eq!(summary.total_profit, 60.0);
        assert_eq!(summary.final_users, 30.0);
        assert_eq!(summary.break_even_month, Some(2));
    }

    #[test]
    fn test_month_lookup() {
        let mut result = ForecastResult::default();
        result.add_row(row(1, 1.0, 0.0));
        assert_eq!(result.month(1).map(|r| r.month), Some(1));
        assert!(result.month(0).is_none());
        assert!(result.month(2).is_none());
    }

    #[test]
    fn test_empty_summary() {
        let summary = ForecastResult::default().summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.final_users, 0.0);
        assert_eq!(summary.break_even_month, None);
    }
}
