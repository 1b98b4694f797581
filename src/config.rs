use std::sync::Arc;

use anyhow::Result;
use moka::future::Cache;

use crate::schemas::AppState;

/// Build the shared application state from the metrics CSV.
///
/// Fatal on any loader error: every chart depends on the table, so there is
/// no degraded-start mode.
pub fn initialize_app_state(metrics_csv: &str) -> Result<AppState> {
    tracing::info!("Loading city metrics from: {}", metrics_csv);
    let table = Arc::new(model::load_metrics_csv(metrics_csv)?);

    // The scatter chart has no selector, so it is rendered exactly once here.
    let scatter = compute::rmse_scatter_chart(&table);

    // Cache for already-rendered reactive figures. The table never changes
    // after load, so entries never go stale.
    let cache = Cache::builder().max_capacity(1000).build();

    Ok(AppState {
        table,
        scatter,
        cache,
    })
}
