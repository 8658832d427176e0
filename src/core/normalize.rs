use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::types::{ChartInput, DataPoint, Series, StackingMode};

/// Scale maximum used when data is empty or sums to nothing.
pub const DEFAULT_MAX_VALUE: f64 = 100.0;

pub const DEFAULT_SERIES_ID: &str = "default";
pub const DEFAULT_SERIES_NAME: &str = "Default";

/// Canonical multi-series form consumed by every path builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedChartData {
    pub series: Vec<Series>,
    pub max_value: f64,
}

impl NormalizedChartData {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            series: Vec::new(),
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|series| series.data.is_empty())
    }

    /// Number of category slots, i.e. the longest series.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.series
            .iter()
            .map(|series| series.data.len())
            .max()
            .unwrap_or(0)
    }

    /// Returns a copy restricted to visible series, with the maximum recomputed.
    #[must_use]
    pub fn visible(&self, stacking: StackingMode) -> Self {
        let series: Vec<Series> = self
            .series
            .iter()
            .filter(|series| series.visible)
            .cloned()
            .collect();
        let max_value = compute_max_value(&series, stacking);
        Self { series, max_value }
    }
}

/// Normalizes typed chart input into the canonical series form.
///
/// Never fails: non-finite values are coerced to zero and an empty input
/// yields the default maximum.
#[must_use]
pub fn normalize(input: &ChartInput, stacking: StackingMode) -> NormalizedChartData {
    let mut series = match input {
        ChartInput::Points(points) => {
            if points.is_empty() {
                Vec::new()
            } else {
                vec![Series::new(
                    DEFAULT_SERIES_ID,
                    DEFAULT_SERIES_NAME,
                    points.clone(),
                )]
            }
        }
        ChartInput::Series(series) => series.clone(),
    };

    for entry in &mut series {
        sanitize_points(&entry.id, &mut entry.data);
    }

    let max_value = compute_max_value(&series, stacking);
    debug!(
        series_count = series.len(),
        max_value,
        ?stacking,
        "normalized chart data"
    );
    NormalizedChartData { series, max_value }
}

/// Normalizes untyped JSON input.
///
/// Unrecognized shapes are logged and produce [`NormalizedChartData::empty`],
/// so callers can render an empty-state placeholder.
#[must_use]
pub fn normalize_value(value: &Value, stacking: StackingMode) -> NormalizedChartData {
    match ChartInput::detect(value) {
        Ok(input) => normalize(&input, stacking),
        Err(err) => {
            warn!(error = %err, "falling back to empty chart data");
            NormalizedChartData::empty()
        }
    }
}

/// Computes the scale maximum shared by bar, line and area layouts.
///
/// Without stacking this is the largest single value. With stacking it is the
/// largest per-category sum across series. A stack whose sum overflows is
/// clamped to `f64::MAX`. Falls back to [`DEFAULT_MAX_VALUE`] when there is no
/// positive value at all.
#[must_use]
pub fn compute_max_value(series: &[Series], stacking: StackingMode) -> f64 {
    let computed = match stacking {
        StackingMode::None => series
            .iter()
            .flat_map(|series| series.data.iter())
            .map(|point| point.value)
            .fold(f64::NEG_INFINITY, f64::max),
        StackingMode::Stacked => {
            let categories = series.iter().map(|s| s.data.len()).max().unwrap_or(0);
            (0..categories)
                .map(|index| stacked_sum(series, index))
                .fold(f64::NEG_INFINITY, f64::max)
        }
    };

    if computed == f64::INFINITY {
        f64::MAX
    } else if computed.is_finite() && computed > 0.0 {
        computed
    } else {
        DEFAULT_MAX_VALUE
    }
}

/// Height of the stack at `index`. Missing points and negative values count
/// as zero, matching how stacked bars are drawn.
#[must_use]
pub fn stacked_sum(series: &[Series], index: usize) -> f64 {
    series
        .iter()
        .filter_map(|series| series.data.get(index))
        .map(|point| point.value.max(0.0))
        .sum()
}

fn sanitize_points(series_id: &str, points: &mut [DataPoint]) {
    for point in points.iter_mut().filter(|point| !point.value.is_finite()) {
        warn!(
            series_id,
            label = %point.label,
            "coercing non-finite value to zero"
        );
        point.value = 0.0;
    }
}
