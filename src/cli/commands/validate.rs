use anyhow::{Context, Result};
use tracing::info;

use model::load_metrics_csv;

/// Load the metrics file the way `serve` would and print a per-city summary.
pub fn validate(metrics_csv: &str) -> Result<()> {
    let table = load_metrics_csv(metrics_csv)
        .with_context(|| format!("metrics file '{metrics_csv}' failed validation"))?;

    info!("Validated {}: {} cities", metrics_csv, table.len());

    for row in table.rows() {
        println!(
            "{}: ARIMA_RMSE={:.4} LSTM_Residual_RMSE={:.4} Hybrid_RMSE={:.4}",
            row.city, row.arima_rmse, row.lstm_residual_rmse, row.hybrid_rmse
        );
    }
    println!("{} cities OK", table.len());

    Ok(())
}
