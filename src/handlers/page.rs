use axum::response::Html;
use tracing::instrument;

/// Dashboard shell: the two selectors and the three chart regions, rendered
/// client-side by Plotly.js against the chart endpoints.
#[instrument]
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../assets/dashboard.html"))
}
