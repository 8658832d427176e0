use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartGeometry;
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;

use super::ChartConfig;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: ChartConfig,
    pub series_visibility: IndexMap<String, bool>,
    pub max_value: f64,
    pub animating: bool,
    pub geometry: ChartGeometry,
    pub hover: HoverState,
}

impl EngineSnapshot {
    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
