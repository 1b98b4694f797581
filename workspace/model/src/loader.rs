use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::metrics::{CityMetrics, MetricsTable};

/// Header columns the input file must carry.
pub const CITY_COLUMN: &str = "City";
pub const RMSE_COLUMNS: [&str; 3] = ["ARIMA_RMSE", "LSTM_Residual_RMSE", "Hybrid_RMSE"];

/// Errors raised while ingesting the metrics file. All of them are fatal at
/// startup: every chart depends on the table, so there is no degraded mode.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read metrics file: {0}")]
    Io(#[from] std::io::Error),

    #[error("metrics file is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("failed to parse metrics file: {0}")]
    Csv(#[from] csv::Error),
}

/// One line of the input file, before MAE derivation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "ARIMA_RMSE")]
    arima_rmse: f64,
    #[serde(rename = "LSTM_Residual_RMSE")]
    lstm_residual_rmse: f64,
    #[serde(rename = "Hybrid_RMSE")]
    hybrid_rmse: f64,
}

/// Load the metrics table from a CSV file on disk.
pub fn load_metrics_csv(path: impl AsRef<Path>) -> Result<MetricsTable, LoadError> {
    let path = path.as_ref();
    debug!("Loading city metrics from {}", path.display());

    let file = File::open(path)?;
    let table = read_metrics(file)?;

    info!(
        "Loaded forecast metrics for {} cities from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Read the metrics table from any CSV source.
///
/// The header is validated up front so a missing column is reported by name
/// instead of as a per-row deserialization failure.
pub fn read_metrics<R: Read>(reader: R) -> Result<MetricsTable, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in std::iter::once(CITY_COLUMN).chain(RMSE_COLUMNS) {
        if !headers.iter().any(|header| header == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<RawRecord>() {
        let record = record?;
        if record.arima_rmse < 0.0
            || record.lstm_residual_rmse < 0.0
            || record.hybrid_rmse < 0.0
        {
            // Input contract says non-negative; keep the value as provided.
            warn!("City '{}' has a negative RMSE value", record.city);
        }
        rows.push(CityMetrics::from_rmse(
            record.city,
            record.arima_rmse,
            record.lstm_residual_rmse,
            record.hybrid_rmse,
        ));
    }

    Ok(MetricsTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
City,ARIMA_RMSE,LSTM_Residual_RMSE,Hybrid_RMSE
Mumbai,2.0,3.0,1.5
Delhi,5.0,4.0,3.0
Pune,1.0,1.2,0.9
";

    #[test]
    fn reads_rows_in_file_order_and_derives_mae() {
        let table = read_metrics(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.city_names(), vec!["Mumbai", "Delhi", "Pune"]);

        let delhi = table.find("Delhi").unwrap();
        assert_eq!(delhi.arima_rmse, 5.0);
        assert_eq!(delhi.arima_mae, 4.0);
        assert_eq!(delhi.lstm_residual_mae, 3.2);
        assert_eq!(delhi.hybrid_mae, 3.0 * crate::metrics::MAE_RMSE_RATIO);
    }

    #[test]
    fn header_only_file_loads_as_an_empty_table() {
        let table =
            read_metrics("City,ARIMA_RMSE,LSTM_Residual_RMSE,Hybrid_RMSE\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "City,ARIMA_RMSE,LSTM_Residual_RMSE\nMumbai,2.0,3.0\n";
        match read_metrics(csv.as_bytes()) {
            Err(LoadError::MissingColumn(column)) => assert_eq!(column, "Hybrid_RMSE"),
            other => panic!("expected MissingColumn error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_numeric_value_fails() {
        let csv = "City,ARIMA_RMSE,LSTM_Residual_RMSE,Hybrid_RMSE\nMumbai,2.0,oops,1.5\n";
        assert!(matches!(
            read_metrics(csv.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn negative_rmse_is_kept() {
        let csv = "City,ARIMA_RMSE,LSTM_Residual_RMSE,Hybrid_RMSE\nMumbai,-2.0,3.0,1.5\n";
        let table = read_metrics(csv.as_bytes()).unwrap();
        assert_eq!(table.find("Mumbai").unwrap().arima_rmse, -2.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_metrics_csv("does/not/exist.csv"),
            Err(LoadError::Io(_))
        ));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "City,ARIMA_RMSE,LSTM_Residual_RMSE,Hybrid_RMSE,Notes\nMumbai,2.0,3.0,1.5,ok\n";
        let table = read_metrics(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
