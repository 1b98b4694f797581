use axum::{
    extract::{Query, State},
    response::Json,
};
use common::Figure;
use tracing::{instrument, trace};

use crate::schemas::{ApiResponse, AppState, CityChartQuery, TopFiveQuery};

/// Single-city RMSE comparison chart
#[utoipa::path(
    get,
    path = "/api/v1/charts/city",
    tag = "charts",
    params(
        ("city" = Option<String>, Query, description = "City to chart; omitted renders an empty figure"),
    ),
    responses(
        (status = 200, description = "City chart rendered successfully", body = ApiResponse<Figure>)
    )
)]
#[instrument]
pub async fn get_city_chart(
    Query(query): Query<CityChartQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Figure>> {
    trace!("Entering get_city_chart function");

    // Create cache key
    let cache_key = format!("city_{}", query.city.as_deref().unwrap_or(""));

    // Check cache first
    if let Some(figure) = state.cache.get(&cache_key).await {
        return Json(ApiResponse {
            data: figure,
            message: "City chart retrieved from cache".to_string(),
            success: true,
        });
    }

    let figure = compute::city_rmse_chart(&state.table, query.city.as_deref());

    // Cache the result
    state.cache.insert(cache_key, figure.clone()).await;

    Json(ApiResponse {
        data: figure,
        message: "City chart rendered successfully".to_string(),
        success: true,
    })
}

/// Grouped top-5 best/worst comparison chart
#[utoipa::path(
    get,
    path = "/api/v1/charts/top5",
    tag = "charts",
    params(
        ("mode" = Option<String>, Query, description = "Ranking direction, \"best\" or \"worst\"; defaults to \"best\""),
    ),
    responses(
        (status = 200, description = "Top-5 chart rendered successfully", body = ApiResponse<Figure>),
        (status = 400, description = "Unrecognized mode value")
    )
)]
#[instrument]
pub async fn get_top_five_chart(
    Query(query): Query<TopFiveQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Figure>> {
    trace!("Entering get_top_five_chart function");

    // Create cache key
    let cache_key = format!("top5_{}", query.mode);

    // Check cache first
    if let Some(figure) = state.cache.get(&cache_key).await {
        return Json(ApiResponse {
            data: figure,
            message: "Top-5 chart retrieved from cache".to_string(),
            success: true,
        });
    }

    let figure = compute::top_five_chart(&state.table, query.mode);

    // Cache the result
    state.cache.insert(cache_key, figure.clone()).await;

    Json(ApiResponse {
        data: figure,
        message: "Top-5 chart rendered successfully".to_string(),
        success: true,
    })
}

/// All-city Hybrid RMSE scatter chart
#[utoipa::path(
    get,
    path = "/api/v1/charts/scatter",
    tag = "charts",
    responses(
        (status = 200, description = "Scatter chart retrieved successfully", body = ApiResponse<Figure>)
    )
)]
#[instrument]
pub async fn get_scatter_chart(State(state): State<AppState>) -> Json<ApiResponse<Figure>> {
    trace!("Entering get_scatter_chart function");

    // Rendered once at startup; every request serves the same figure
    Json(ApiResponse {
        data: state.scatter.clone(),
        message: "Scatter chart retrieved successfully".to_string(),
        success: true,
    })
}
