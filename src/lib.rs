//! Revenue Forecaster - Monthly projection of users, revenue, cost and profit
//!
//! This library provides:
//! - A deterministic month-by-month forecast engine
//! - Step-change policy adjustments (revenue boost, growth drop)
//! - Parameter loading and form-style input clamping
//! - Display rounding, console tables and CSV/JSON export
//! - Batch scenario runs

pub mod error;
pub mod params;
pub mod forecast;
pub mod report;
pub mod export;
pub mod scenario;

// Re-export commonly used types
pub use error::{ForecastError, ExportError, ParamsError};
pub use params::ForecastParams;
pub use forecast::{forecast, ForecastEngine, ForecastConfig, ForecastResult, ForecastRow};
pub use scenario::ScenarioRunner;
