use common::TopMode;
use model::{CityMetrics, MetricsTable};

/// Number of cities the grouped comparison chart shows per direction.
pub const TOP_CITY_COUNT: usize = 5;

/// Rank cities by Hybrid RMSE and keep the first `count`.
///
/// `Best` sorts ascending, `Worst` descending. The sort is stable, so equal
/// Hybrid RMSE values keep their load order. A table with fewer than `count`
/// rows yields all of them, sorted.
pub fn rank_by_hybrid_rmse(
    table: &MetricsTable,
    mode: TopMode,
    count: usize,
) -> Vec<&CityMetrics> {
    let mut ranked: Vec<&CityMetrics> = table.rows().iter().collect();
    match mode {
        TopMode::Best => ranked.sort_by(|a, b| a.hybrid_rmse.total_cmp(&b.hybrid_rmse)),
        TopMode::Worst => ranked.sort_by(|a, b| b.hybrid_rmse.total_cmp(&a.hybrid_rmse)),
    }
    ranked.truncate(count);
    ranked
}
