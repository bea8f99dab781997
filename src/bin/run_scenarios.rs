//! Run every scenario in a CSV file and write one summary row per scenario
//!
//! Usage: cargo run --bin run_scenarios -- scenarios.csv

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::time::Instant;

use revenue_forecaster::{
    params::load_scenarios,
    scenario::ScenarioRunner,
    ForecastConfig,
};

#[derive(Parser, Debug)]
#[command(name = "run_scenarios")]
#[command(about = "Forecast a batch of scenarios from a CSV file")]
struct Args {
    /// Scenario CSV (name plus camelCase parameter columns)
    scenarios: PathBuf,

    /// Summary output path
    #[arg(short, long, default_value = "scenario_summary.csv")]
    output: PathBuf,

    /// Clamp active users at zero each month
    #[arg(long)]
    floor_users: bool,
}

#[derive(Debug, serde::Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "Scenario")]
    name: &'a str,
    #[serde(rename = "Months")]
    months: u32,
    #[serde(rename = "FinalUsers")]
    final_users: i64,
    #[serde(rename = "TotalRevenue")]
    total_revenue: String,
    #[serde(rename = "TotalCosts")]
    total_costs: String,
    #[serde(rename = "TotalProfit")]
    total_profit: String,
    #[serde(rename = "BreakEvenMonth")]
    break_even_month: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("loading scenarios from {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_config(ForecastConfig {
        floor_users_at_zero: args.floor_users,
        ..Default::default()
    });

    let run_start = Instant::now();
    let outcomes = runner.run_named(&scenarios);
    println!("Forecasts complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut failed = 0usize;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => {
                let summary = result.summary();
                writer.serialize(SummaryRow {
                    name: &outcome.name,
                    months: summary.total_months,
                    final_users: summary.final_users.round() as i64,
                    total_revenue: format!("{:.2}", summary.total_revenue),
                    total_costs: format!("{:.2}", summary.total_cost),
                    total_profit: format!("{:.2}", summary.total_profit),
                    break_even_month: summary.break_even_month,
                })?;
            }
            Err(err) => {
                failed += 1;
                error!("scenario {} skipped: {}", outcome.name, err);
            }
        }
    }
    writer.flush()?;

    info!("{} of {} scenarios failed", failed, outcomes.len());
    println!("Output written to {}", args.output.display());
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
