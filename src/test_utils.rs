#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;

    use axum::Router;
    use model::{CityMetrics, MetricsTable};
    use moka::future::Cache;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    use crate::router::create_router;
    use crate::schemas::AppState;

    /// Metrics table shared by the integration tests. Hybrid RMSE ordering:
    /// Pune < Mumbai < Chennai < Kolkata < Delhi < Jaipur.
    pub fn sample_table() -> MetricsTable {
        MetricsTable::new(vec![
            CityMetrics::from_rmse("Mumbai".to_string(), 2.0, 3.0, 1.5),
            CityMetrics::from_rmse("Delhi".to_string(), 5.0, 4.0, 3.0),
            CityMetrics::from_rmse("Pune".to_string(), 1.0, 1.2, 0.9),
            CityMetrics::from_rmse("Chennai".to_string(), 2.5, 2.1, 1.8),
            CityMetrics::from_rmse("Kolkata".to_string(), 3.5, 3.1, 2.6),
            CityMetrics::from_rmse("Jaipur".to_string(), 4.2, 3.9, 3.4),
        ])
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        let table = Arc::new(sample_table());
        let scatter = compute::rmse_scatter_chart(&table);
        let cache = Cache::new(100);

        AppState {
            table,
            scatter,
            cache,
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state();
        create_router(state)
    }
}
