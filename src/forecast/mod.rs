//! Forecast engine for month-by-month user and revenue projections

mod state;
mod engine;
mod rows;
pub mod adjustments;

pub use state::ForecastState;
pub use engine::{forecast, ForecastEngine, ForecastConfig};
pub use rows::{ForecastRow, ForecastResult, ForecastSummary};
pub use adjustments::{AdjustedRate, AdjustmentSchedule, PolicyAdjustment};
