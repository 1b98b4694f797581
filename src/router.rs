use crate::handlers::{
    charts::{get_city_chart, get_scatter_chart, get_top_five_chart},
    cities::{get_all_city_metrics, get_cities, get_city_metrics},
    health::health_check,
    page::dashboard,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Dashboard page
        .route("/", get(dashboard))
        // Health check
        .route("/health", get(health_check))
        // City metrics routes
        .route("/api/v1/cities", get(get_cities))
        .route("/api/v1/cities/:city/metrics", get(get_city_metrics))
        .route("/api/v1/metrics", get(get_all_city_metrics))
        // Chart routes
        .route("/api/v1/charts/city", get(get_city_chart))
        .route("/api/v1/charts/top5", get(get_top_five_chart))
        .route("/api/v1/charts/scatter", get(get_scatter_chart))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
