use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::CityMetrics;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};
use utoipa::ToSchema;

use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Full metric row for one city: RMSE values plus the derived MAE values
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CityMetricsResponse {
    pub city: String,
    pub arima_rmse: f64,
    pub lstm_residual_rmse: f64,
    pub hybrid_rmse: f64,
    pub arima_mae: f64,
    pub lstm_residual_mae: f64,
    pub hybrid_mae: f64,
}

impl From<&CityMetrics> for CityMetricsResponse {
    fn from(row: &CityMetrics) -> Self {
        Self {
            city: row.city.clone(),
            arima_rmse: row.arima_rmse,
            lstm_residual_rmse: row.lstm_residual_rmse,
            hybrid_rmse: row.hybrid_rmse,
            arima_mae: row.arima_mae,
            lstm_residual_mae: row.lstm_residual_mae,
            hybrid_mae: row.hybrid_mae,
        }
    }
}

/// Get all city names in table load order
#[utoipa::path(
    get,
    path = "/api/v1/cities",
    tag = "cities",
    responses(
        (status = 200, description = "Cities retrieved successfully", body = ApiResponse<Vec<String>>)
    )
)]
#[instrument]
pub async fn get_cities(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    trace!("Entering get_cities function");

    let cities = state.table.city_names();
    debug!("Returning {} city names", cities.len());

    Json(ApiResponse {
        data: cities,
        message: "Cities retrieved successfully".to_string(),
        success: true,
    })
}

/// Get metric rows for all cities
#[utoipa::path(
    get,
    path = "/api/v1/metrics",
    tag = "cities",
    responses(
        (status = 200, description = "City metrics retrieved successfully", body = ApiResponse<Vec<CityMetricsResponse>>)
    )
)]
#[instrument]
pub async fn get_all_city_metrics(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<CityMetricsResponse>>> {
    trace!("Entering get_all_city_metrics function");

    let rows: Vec<CityMetricsResponse> = state.table.rows().iter().map(Into::into).collect();
    debug!("Returning metrics for {} cities", rows.len());

    Json(ApiResponse {
        data: rows,
        message: "City metrics retrieved successfully".to_string(),
        success: true,
    })
}

/// Get the metric row for a single city
#[utoipa::path(
    get,
    path = "/api/v1/cities/{city}/metrics",
    tag = "cities",
    params(
        ("city" = String, Path, description = "City name"),
    ),
    responses(
        (status = 200, description = "City metrics retrieved successfully", body = ApiResponse<CityMetricsResponse>),
        (status = 404, description = "City not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_city_metrics(
    Path(city): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CityMetricsResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_city_metrics function");

    match state.table.find(&city) {
        Some(row) => Ok(Json(ApiResponse {
            data: row.into(),
            message: "City metrics retrieved successfully".to_string(),
            success: true,
        })),
        None => {
            debug!("City '{}' not found in the metrics table", city);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("City '{city}' does not exist in the metrics table"),
                    code: "CITY_NOT_FOUND".to_string(),
                    success: false,
                }),
            ))
        }
    }
}
