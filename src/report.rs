//! Presentation rounding and console tables for forecast output

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::forecast::{ForecastResult, ForecastRow, ForecastSummary};

/// Column headers shared by the console table and CSV export
pub const HEADERS: [&str; 5] = ["Month", "Users", "Revenue", "Costs", "Profit"];

/// A forecast row rounded for display and export
///
/// Users are whole numbers, money is rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub month: u32,
    pub users: i64,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
}

impl From<&ForecastRow> for DisplayRow {
    fn from(row: &ForecastRow) -> Self {
        Self {
            month: row.month,
            users: row.active_users.round() as i64,
            revenue: round_money(row.revenue),
            costs: round_money(row.cost),
            profit: round_money(row.profit),
        }
    }
}

/// Round a monetary amount to 2 decimal places
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounded rows for a whole forecast
pub fn display_rows(result: &ForecastResult) -> Vec<DisplayRow> {
    result.iter().map(DisplayRow::from).collect()
}

/// Format rows as a right-aligned console table
pub fn render_table(rows: &[DisplayRow]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>5} {:>10} {:>14} {:>14} {:>14}",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4]
    );
    let _ = writeln!(out, "{}", "-".repeat(61));

    for row in rows {
        let _ = writeln!(
            out,
            "{:>5} {:>10} {:>14.2} {:>14.2} {:>14.2}",
            row.month, row.users, row.revenue, row.costs, row.profit
        );
    }

    out
}

/// Format a forecast summary block
pub fn render_summary(summary: &ForecastSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "  Months:        {}", summary.total_months);
    let _ = writeln!(out, "  Final Users:   {}", summary.final_users.round() as i64);
    let _ = writeln!(out, "  Total Revenue: {:.2}", summary.total_revenue);
    let _ = writeln!(out, "  Total Costs:   {:.2}", summary.total_cost);
    let _ = writeln!(out, "  Total Profit:  {:.2}", summary.total_profit);
    match summary.break_even_month {
        Some(month) => { let _ = writeln!(out, "  Break-even:    month {}", month); }
        None => { let _ = writeln!(out, "  Break-even:    not reached"); }
    }

    out
}
