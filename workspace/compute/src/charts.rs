use common::{Figure, TopMode};
use model::MetricsTable;
use serde_json::json;
use tracing::{debug, instrument};

use crate::palette::{CONTINUOUS_SCALE, MODEL_BAR_COLORS, QUALITATIVE_SET2};
use crate::selection::{TOP_CITY_COUNT, rank_by_hybrid_rmse};

/// Build the single-city RMSE comparison chart.
///
/// No selection, or a city the table does not contain, renders the empty
/// figure; the reaction never fails.
#[instrument(skip(table))]
pub fn city_rmse_chart(table: &MetricsTable, city: Option<&str>) -> Figure {
    let Some(city) = city else {
        return Figure::empty();
    };
    let Some(row) = table.find(city) else {
        debug!("City '{}' is not in the metrics table", city);
        return Figure::empty();
    };

    let data = vec![json!({
        "type": "bar",
        "x": ["ARIMA", "LSTM Residual", "Hybrid"],
        "y": [row.arima_rmse, row.lstm_residual_rmse, row.hybrid_rmse],
        "marker": {"color": MODEL_BAR_COLORS},
    })];
    let layout = json!({
        "title": format!("RMSEs for {}", row.city),
        "xaxis": {"title": "Model Type"},
        "yaxis": {"title": "RMSE"},
    });

    Figure::new(data, layout)
}

/// Build the grouped top-5 comparison chart for the given ranking direction.
///
/// One group per selected city, one bar trace per metric column (three RMSE
/// plus three derived MAE), colored by cycling the qualitative palette.
#[instrument(skip(table))]
pub fn top_five_chart(table: &MetricsTable, mode: TopMode) -> Figure {
    let ranked = rank_by_hybrid_rmse(table, mode, TOP_CITY_COUNT);
    let cities: Vec<String> = ranked.iter().map(|row| row.city.clone()).collect();

    let series: [(&str, Vec<f64>); 6] = [
        ("ARIMA_RMSE", ranked.iter().map(|row| row.arima_rmse).collect()),
        (
            "LSTM_Residual_RMSE",
            ranked.iter().map(|row| row.lstm_residual_rmse).collect(),
        ),
        ("Hybrid_RMSE", ranked.iter().map(|row| row.hybrid_rmse).collect()),
        ("ARIMA_MAE", ranked.iter().map(|row| row.arima_mae).collect()),
        (
            "LSTM_Residual_MAE",
            ranked.iter().map(|row| row.lstm_residual_mae).collect(),
        ),
        ("Hybrid_MAE", ranked.iter().map(|row| row.hybrid_mae).collect()),
    ];

    let data = series
        .into_iter()
        .enumerate()
        .map(|(index, (name, values))| {
            json!({
                "type": "bar",
                "name": name,
                "x": cities.clone(),
                "y": values,
                "marker": {"color": QUALITATIVE_SET2[index % QUALITATIVE_SET2.len()]},
            })
        })
        .collect();

    let title = match mode {
        TopMode::Best => "Top 5 Best Performing Cities (Lowest Hybrid RMSE)",
        TopMode::Worst => "Top 5 Worst Performing Cities (Highest Hybrid RMSE)",
    };
    let layout = json!({
        "barmode": "group",
        "title": title,
        "xaxis": {"title": "City", "tickangle": -45},
        "yaxis": {"title": "Error"},
        "legend": {"title": {"text": "Metric"}},
        "height": 500,
        "margin": {"r": 20, "t": 50, "l": 20, "b": 150},
    });

    Figure::new(data, layout)
}

/// Build the all-city scatter of Hybrid RMSE.
///
/// One marker per city; marker color follows the Hybrid RMSE on a continuous
/// scale, and the hover text carries the other two models' RMSE values.
#[instrument(skip(table))]
pub fn rmse_scatter_chart(table: &MetricsTable) -> Figure {
    let rows = table.rows();
    let cities: Vec<&str> = rows.iter().map(|row| row.city.as_str()).collect();
    let hybrid: Vec<f64> = rows.iter().map(|row| row.hybrid_rmse).collect();
    let customdata: Vec<[f64; 2]> = rows
        .iter()
        .map(|row| [row.arima_rmse, row.lstm_residual_rmse])
        .collect();

    let data = vec![json!({
        "type": "scatter",
        "mode": "markers",
        "x": cities,
        "y": hybrid.clone(),
        "customdata": customdata,
        "hovertemplate": "City=%{x}<br>Hybrid_RMSE=%{y}<br>ARIMA_RMSE=%{customdata[0]}\
            <br>LSTM_Residual_RMSE=%{customdata[1]}<extra></extra>",
        "marker": {
            "color": hybrid,
            "colorscale": CONTINUOUS_SCALE,
            "showscale": true,
            "colorbar": {"title": "Hybrid_RMSE"},
        },
    })];
    let layout = json!({
        "title": "All Cities - Hybrid Model RMSE",
        "xaxis": {"title": "City", "tickangle": -45},
        "yaxis": {"title": "Hybrid_RMSE"},
        "height": 500,
        "margin": {"r": 20, "t": 50, "l": 20, "b": 150},
    });

    Figure::new(data, layout)
}
