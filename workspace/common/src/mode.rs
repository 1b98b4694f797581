use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ranking direction for the top-5 comparison chart.
///
/// The selector is closed to these two values; anything else is rejected at
/// deserialization rather than silently mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TopMode {
    /// Lowest Hybrid RMSE first
    #[default]
    Best,
    /// Highest Hybrid RMSE first
    Worst,
}

impl fmt::Display for TopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopMode::Best => write!(f, "best"),
            TopMode::Worst => write!(f, "worst"),
        }
    }
}
