use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A Plotly figure description: trace objects plus a layout object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Figure {
    /// Plotly traces, in draw order
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
    /// Plotly layout object
    #[schema(value_type = Object)]
    pub layout: Value,
}

impl Figure {
    pub fn new(data: Vec<Value>, layout: Value) -> Self {
        Self { data, layout }
    }

    /// A figure with no traces and an empty layout. Rendering it clears the
    /// target chart region without raising an error.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            layout: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn trace_count(&self) -> usize {
        self.data.len()
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_figure_serializes_to_plotly_shape() {
        let serialized = serde_json::to_value(Figure::empty()).unwrap();
        assert_eq!(serialized, json!({"data": [], "layout": {}}));
    }

    #[test]
    fn figure_round_trips() {
        let figure = Figure::new(
            vec![json!({"type": "bar", "x": ["a"], "y": [1.0]})],
            json!({"title": "t"}),
        );
        let decoded: Figure =
            serde_json::from_value(serde_json::to_value(&figure).unwrap()).unwrap();
        assert_eq!(decoded, figure);
        assert_eq!(decoded.trace_count(), 1);
    }
}
