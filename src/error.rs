//! Error types for forecasting, parameter loading and export

use thiserror::Error;

/// Faults raised by the forecast engine itself
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// Horizon must be a positive number of months
    #[error("invalid forecast horizon: {months} months (must be at least 1)")]
    InvalidHorizon { months: i64 },
}

/// Failures while reading parameter files
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read parameters: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scenario CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures while exporting a forecast
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export; a forecast has to be generated first
    #[error("no forecast rows to export")]
    EmptyForecast,

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_horizon_message() {
        let err = ForecastError::InvalidHorizon { months: -1 };
        assert_eq!(
            err.to_string(),
            "invalid forecast horizon: -1 months (must be at least 1)"
        );
    }
}
