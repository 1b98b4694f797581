use serde::Serialize;

/// Ratio used to derive the MAE columns from their RMSE counterparts.
///
/// TODO: replace the ratio-derived MAE columns once measured MAE values ship
/// with the input file.
pub const MAE_RMSE_RATIO: f64 = 0.8;

/// Forecast error metrics for a single city.
///
/// The three RMSE values come straight from the input file; the MAE values
/// are always recomputed from them at load time and never persisted back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityMetrics {
    pub city: String,
    pub arima_rmse: f64,
    pub lstm_residual_rmse: f64,
    pub hybrid_rmse: f64,
    pub arima_mae: f64,
    pub lstm_residual_mae: f64,
    pub hybrid_mae: f64,
}

impl CityMetrics {
    /// Build a row from its RMSE values, deriving the MAE columns.
    pub fn from_rmse(
        city: String,
        arima_rmse: f64,
        lstm_residual_rmse: f64,
        hybrid_rmse: f64,
    ) -> Self {
        Self {
            city,
            arima_rmse,
            lstm_residual_rmse,
            hybrid_rmse,
            arima_mae: arima_rmse * MAE_RMSE_RATIO,
            lstm_residual_mae: lstm_residual_rmse * MAE_RMSE_RATIO,
            hybrid_mae: hybrid_rmse * MAE_RMSE_RATIO,
        }
    }
}

/// The full metrics table, loaded once at startup and read-only afterwards.
///
/// Rows keep the order of the input file; that order is what populates the
/// city selector and what breaks ranking ties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTable {
    rows: Vec<CityMetrics>,
}

impl MetricsTable {
    pub fn new(rows: Vec<CityMetrics>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CityMetrics] {
        &self.rows
    }

    /// City names in load order.
    pub fn city_names(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.city.clone()).collect()
    }

    /// Look up a city's row. Returns the first match should the input file
    /// ever violate the uniqueness of city names.
    pub fn find(&self, city: &str) -> Option<&CityMetrics> {
        self.rows.iter().find(|row| row.city == city)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
