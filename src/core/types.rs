use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// One labelled sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            id: None,
            label: label.into(),
            value,
            color: None,
        }
    }

    /// Converts a decimal amount into a point.
    pub fn from_decimal(label: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(label, decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Named, ordered sequence of points sharing a color and a visibility toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub name: String,
    pub data: Vec<DataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Series {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
            color: None,
            visible: true,
        }
    }

    /// Builds a series from bare values labelled by their index.
    #[must_use]
    pub fn from_values(id: impl Into<String>, values: &[f64]) -> Self {
        let id = id.into();
        let data = values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(index.to_string(), *value))
            .collect();
        Self::new(id.clone(), id, data)
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Chart input, decided once at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartInput {
    /// Flat points, promoted to one implicit series.
    Points(Vec<DataPoint>),
    Series(Vec<Series>),
}

impl ChartInput {
    /// Classifies untyped JSON input.
    ///
    /// Arrays of `{label, value}` objects are points, arrays of
    /// `{id, name, data}` objects are series. Empty arrays are empty points.
    pub fn detect(value: &Value) -> ChartResult<Self> {
        let Some(items) = value.as_array() else {
            return Err(ChartError::DataFormat(
                "chart data must be an array".to_owned(),
            ));
        };

        if items.is_empty() {
            return Ok(Self::Points(Vec::new()));
        }

        if items.iter().all(looks_like_point) {
            let points = serde_json::from_value(value.clone())
                .map_err(|e| ChartError::DataFormat(format!("invalid point array: {e}")))?;
            return Ok(Self::Points(points));
        }

        if items.iter().all(looks_like_series) {
            let series = serde_json::from_value(value.clone())
                .map_err(|e| ChartError::DataFormat(format!("invalid series array: {e}")))?;
            return Ok(Self::Series(series));
        }

        Err(ChartError::DataFormat(
            "elements are neither points nor series".to_owned(),
        ))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Points(points) => points.is_empty(),
            Self::Series(series) => series.iter().all(|s| s.data.is_empty()),
        }
    }
}

impl From<Vec<DataPoint>> for ChartInput {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::Points(points)
    }
}

impl From<Vec<Series>> for ChartInput {
    fn from(series: Vec<Series>) -> Self {
        Self::Series(series)
    }
}

fn looks_like_point(item: &Value) -> bool {
    item.get("label").is_some() && item.get("value").is_some_and(Value::is_number)
}

fn looks_like_series(item: &Value) -> bool {
    item.get("id").is_some() && item.get("name").is_some() && item.get("data").is_some_and(Value::is_array)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    /// One rect per point of the first series.
    #[default]
    Simple,
    Stacked,
    Grouped,
}

/// Whether scale maxima are computed per value or per stacked category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingMode {
    #[default]
    None,
    Stacked,
}

impl From<BarMode> for StackingMode {
    fn from(mode: BarMode) -> Self {
        match mode {
            BarMode::Stacked => Self::Stacked,
            BarMode::Simple | BarMode::Grouped => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveMode {
    #[default]
    Straight,
    /// Cubic segments with flattened tangents at each sample.
    Curved,
}
