//! Fixed chart palettes. These are part of the chart contract, not styling
//! left to the page.

/// Bar colors for the single-city chart, in model order
/// (ARIMA, LSTM Residual, Hybrid).
pub const MODEL_BAR_COLORS: [&str; 3] = ["#636EFA", "#EF553B", "#00CC96"];

/// Qualitative palette cycled across the grouped comparison series.
pub const QUALITATIVE_SET2: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

/// Continuous scale name for the all-city scatter coloring.
pub const CONTINUOUS_SCALE: &str = "Viridis";
