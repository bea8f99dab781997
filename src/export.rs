//! CSV and JSON export of rounded forecast rows

use csv::Writer;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::forecast::ForecastResult;
use crate::report::{display_rows, DisplayRow, HEADERS};

/// Default file name for CSV exports
pub const DEFAULT_CSV_PATH: &str = "revenue_forecast.csv";

/// Default file name for JSON exports
pub const DEFAULT_JSON_PATH: &str = "revenue_forecast.json";

/// Write rounded rows as CSV: `Month,Users,Revenue,Costs,Profit`
pub fn write_csv<W: Write>(writer: W, result: &ForecastResult) -> Result<(), ExportError> {
    let rows = exportable_rows(result)?;
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer.write_record(HEADERS)?;
    for row in &rows {
        csv_writer.write_record(&[
            row.month.to_string(),
            row.users.to_string(),
            row.revenue.to_string(),
            row.costs.to_string(),
            row.profit.to_string(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write rounded rows as a pretty-printed JSON array
pub fn write_json<W: Write>(writer: W, result: &ForecastResult) -> Result<(), ExportError> {
    let rows = exportable_rows(result)?;
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

/// Export CSV to a file
pub fn export_csv<P: AsRef<Path>>(path: P, result: &ForecastResult) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), result)?;
    info!("wrote {} rows to {}", result.len(), path.display());
    Ok(())
}

/// Export JSON to a file
pub fn export_json<P: AsRef<Path>>(path: P, result: &ForecastResult) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, result)?;
    writer.flush()?;
    info!("wrote {} rows to {}", result.len(), path.display());
    Ok(())
}

fn exportable_rows(result: &ForecastResult) -> Result<Vec<DisplayRow>, ExportError> {
    if result.is_empty() {
        return Err(ExportError::EmptyForecast);
    }
    Ok(display_rows(result))
}
