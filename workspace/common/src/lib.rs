//! Common transport-layer types shared between the chart builders and the
//! HTTP layer. The `Figure` value serializes to exactly the shape the
//! dashboard page hands to `Plotly.react`.

mod figure;
mod mode;

pub use figure::Figure;
pub use mode::TopMode;
