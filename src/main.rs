//! Revenue Forecaster CLI
//!
//! Command-line interface for running a single forecast

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use std::path::PathBuf;

use revenue_forecaster::{
    export::{self, DEFAULT_CSV_PATH, DEFAULT_JSON_PATH},
    params::load_params,
    report::{display_rows, render_summary, render_table},
    ForecastConfig, ForecastEngine, ForecastParams,
};

#[derive(Parser, Debug)]
#[command(name = "revenue_forecaster")]
#[command(about = "Forecast monthly users, revenue, costs and profit")]
struct Args {
    /// JSON file with base parameters (flags below override it)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Number of months (12-36 unless --no-clamp)
    #[arg(short, long, allow_negative_numbers = true)]
    months: Option<i64>,

    /// Starting users
    #[arg(long)]
    starting_users: Option<f64>,

    /// Monthly growth rate (%)
    #[arg(long)]
    growth_rate: Option<f64>,

    /// Monthly churn rate (%)
    #[arg(long)]
    churn_rate: Option<f64>,

    /// Revenue per user
    #[arg(long)]
    revenue_per_user: Option<f64>,

    /// Cost per user
    #[arg(long)]
    cost_per_user: Option<f64>,

    /// Fixed monthly overhead
    #[arg(long)]
    fixed_overhead: Option<f64>,

    /// 10% revenue increase after month 6
    #[arg(long)]
    revenue_boost: bool,

    /// 50% growth drop after month 12
    #[arg(long)]
    growth_drop: bool,

    /// Clamp active users at zero each month
    #[arg(long)]
    floor_users: bool,

    /// Skip the input form's range clamping
    #[arg(long)]
    no_clamp: bool,

    /// Export CSV (default path: revenue_forecast.csv)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CSV_PATH)]
    csv: Option<PathBuf>,

    /// Export JSON (default path: revenue_forecast.json)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_JSON_PATH)]
    json: Option<PathBuf>,
}

impl Args {
    fn to_params(&self) -> Result<ForecastParams> {
        let mut params = match &self.params {
            Some(path) => load_params(path)
                .with_context(|| format!("loading parameters from {}", path.display()))?,
            None => ForecastParams::default(),
        };

        if let Some(v) = self.months { params.months = v; }
        if let Some(v) = self.starting_users { params.starting_users = v; }
        if let Some(v) = self.growth_rate { params.growth_rate = v; }
        if let Some(v) = self.churn_rate { params.churn_rate = v; }
        if let Some(v) = self.revenue_per_user { params.revenue_per_user = v; }
        if let Some(v) = self.cost_per_user { params.cost_per_user = v; }
        if let Some(v) = self.fixed_overhead { params.fixed_overhead = v; }
        params.enable_revenue_boost |= self.revenue_boost;
        params.enable_growth_drop |= self.growth_drop;

        if !self.no_clamp && params.needs_clamping() {
            let clamped = params.clamped_for_input();
            warn!("inputs clamped to form ranges: {:?} -> {:?}", params, clamped);
            params = clamped;
        }

        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let params = args.to_params()?;

    println!("Revenue Forecaster v{}", env!("CARGO_PKG_VERSION"));
    println!("=========================\n");
    println!("Months: {}", params.months);
    println!("  Starting Users:   {}", params.starting_users);
    println!("  Growth / Churn:   {}% / {}%", params.growth_rate, params.churn_rate);
    println!("  Revenue per User: {:.2}", params.revenue_per_user);
    println!("  Cost per User:    {:.2}", params.cost_per_user);
    println!("  Fixed Overhead:   {:.2}", params.fixed_overhead);
    println!("  Revenue Boost:    {}", params.enable_revenue_boost);
    println!("  Growth Drop:      {}", params.enable_growth_drop);
    println!();

    let engine = ForecastEngine::new(ForecastConfig {
        floor_users_at_zero: args.floor_users,
        ..Default::default()
    });
    let result = engine.forecast(&params)?;

    print!("{}", render_table(&display_rows(&result)));
    println!();
    print!("{}", render_summary(&result.summary()));

    if let Some(path) = &args.csv {
        export::export_csv(path, &result)
            .with_context(|| format!("exporting CSV to {}", path.display()))?;
        println!("\nCSV written to: {}", path.display());
    }

    if let Some(path) = &args.json {
        export::export_json(path, &result)
            .with_context(|| format!("exporting JSON to {}", path.display()))?;
        println!("\nJSON written to: {}", path.display());
    }

    Ok(())
}
