use std::sync::Arc;

use common::{Figure, TopMode};
use model::MetricsTable;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::cities::CityMetricsResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// City metrics table, loaded once at startup and immutable afterwards
    pub table: Arc<MetricsTable>,
    /// All-city scatter figure, rendered once at startup
    pub scatter: Figure,
    /// Cache for already-rendered reactive figures
    pub cache: Cache<String, Figure>,
}

/// Query parameters for the single-city chart endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct CityChartQuery {
    /// City to chart; omitted renders an empty figure
    pub city: Option<String>,
}

/// Query parameters for the top-5 chart endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct TopFiveQuery {
    /// Ranking direction ("best" or "worst"); defaults to "best"
    #[serde(default)]
    pub mode: TopMode,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of cities in the loaded metrics table
    pub cities: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::cities::get_cities,
        crate::handlers::cities::get_all_city_metrics,
        crate::handlers::cities::get_city_metrics,
        crate::handlers::charts::get_city_chart,
        crate::handlers::charts::get_top_five_chart,
        crate::handlers::charts::get_scatter_chart,
    ),
    components(
        schemas(
            ApiResponse<Figure>,
            ApiResponse<Vec<String>>,
            ApiResponse<CityMetricsResponse>,
            ApiResponse<Vec<CityMetricsResponse>>,
            ErrorResponse,
            HealthResponse,
            CityChartQuery,
            TopFiveQuery,
            Figure,
            TopMode,
            CityMetricsResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "cities", description = "City metrics endpoints"),
        (name = "charts", description = "Chart figure endpoints"),
    ),
    info(
        title = "T-Climate Dashboard API",
        description = "Citywise forecast error dashboard - serves Plotly figures comparing ARIMA, LSTM-residual and Hybrid model errors",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
