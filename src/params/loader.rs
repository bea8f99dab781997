//! Load forecast parameters from JSON files and scenario CSVs

use super::ForecastParams;
use crate::error::ParamsError;
use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row for a scenario file
///
/// Headers are the camelCase parameter names plus a `name` column.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    months: i64,
    #[serde(rename = "startingUsers")]
    starting_users: f64,
    #[serde(rename = "growthRate")]
    growth_rate: f64,
    #[serde(rename = "churnRate")]
    churn_rate: f64,
    #[serde(rename = "revenuePerUser")]
    revenue_per_user: f64,
    #[serde(rename = "costPerUser")]
    cost_per_user: f64,
    #[serde(rename = "fixedOverhead")]
    fixed_overhead: f64,
    #[serde(rename = "enableRevenueBoost", default)]
    enable_revenue_boost: bool,
    #[serde(rename = "enableGrowthDrop", default)]
    enable_growth_drop: bool,
}

impl CsvRow {
    fn into_scenario(self) -> NamedScenario {
        NamedScenario {
            name: self.name,
            params: ForecastParams {
                months: self.months,
                starting_users: self.starting_users,
                growth_rate: self.growth_rate,
                churn_rate: self.churn_rate,
                revenue_per_user: self.revenue_per_user,
                cost_per_user: self.cost_per_user,
                fixed_overhead: self.fixed_overhead,
                enable_revenue_boost: self.enable_revenue_boost,
                enable_growth_drop: self.enable_growth_drop,
            },
        }
    }
}

/// A parameter set with a label, as read from a scenario file
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub params: ForecastParams,
}

/// Load a single parameter set from a JSON file
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<ForecastParams, ParamsError> {
    let file = File::open(path)?;
    load_params_from_reader(BufReader::new(file))
}

/// Load a single parameter set from any JSON reader
pub fn load_params_from_reader<R: std::io::Read>(reader: R) -> Result<ForecastParams, ParamsError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, ParamsError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>, ParamsError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    Ok(scenarios)
}
