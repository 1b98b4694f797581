//! Chart construction over the immutable city metrics table.
//!
//! Every builder is a pure, synchronous function of the table and its
//! selector value: same inputs produce a bit-identical [`common::Figure`].
//! Nothing in here performs I/O or touches shared state, so the HTTP layer
//! can call these from any number of concurrent requests without
//! coordination.

pub mod charts;
pub mod palette;
pub mod selection;

pub use charts::{city_rmse_chart, rmse_scatter_chart, top_five_chart};
pub use selection::{TOP_CITY_COUNT, rank_by_hybrid_rmse};
