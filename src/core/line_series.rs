use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::normalize::NormalizedChartData;
use crate::core::path::PathData;
use crate::core::primitives::Point;
use crate::core::scale::ValueScale;
use crate::core::types::{CurveMode, Viewport};
use crate::error::{ChartError, ChartResult};

/// Half-length of the stroke drawn for a single-sample series.
const SINGLE_POINT_HALF_STROKE_PX: f64 = 1.0;

/// Projected line sample in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub data_index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl LinePoint {
    #[must_use]
    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Deterministic geometry for one line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub series_index: usize,
    pub curve: CurveMode,
    pub points: Vec<LinePoint>,
}

impl LineGeometry {
    /// Builds the stroke path for the current points.
    #[must_use]
    pub fn path(&self) -> PathData {
        let positions: Vec<Point> = self.points.iter().map(|p| p.position()).collect();
        line_path(&positions, self.curve)
    }

    /// Same geometry with every sample dropped onto `baseline_y`.
    #[must_use]
    pub fn collapsed(&self, baseline_y: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|point| LinePoint {
                    y: baseline_y,
                    ..*point
                })
                .collect(),
            ..self.clone()
        }
    }
}

/// Projects every series into line geometry.
///
/// Samples are spaced `width / (n - 1)` apart where `n` is the longest series.
/// Empty data or a degenerate viewport yields no lines.
#[must_use]
pub fn project_lines(
    data: &NormalizedChartData,
    viewport: Viewport,
    curve: CurveMode,
) -> Vec<LineGeometry> {
    let category_count = data.category_count();
    if category_count == 0 {
        return Vec::new();
    }

    let value_scale = match ValueScale::new(data.max_value, viewport.height_px()) {
        Ok(scale) if viewport.is_valid() => scale,
        Ok(_) => {
            debug!(?viewport, "no line geometry for empty viewport");
            return Vec::new();
        }
        Err(err) => {
            debug!(error = %err, "no line geometry");
            return Vec::new();
        }
    };

    data.series
        .iter()
        .enumerate()
        .filter(|(_, series)| !series.data.is_empty())
        .map(|(series_index, series)| LineGeometry {
            series_index,
            curve,
            points: series
                .data
                .iter()
                .enumerate()
                .map(|(data_index, point)| LinePoint {
                    data_index,
                    x: sample_x(data_index, category_count, viewport.width_px()),
                    y: value_scale.inverted_position(point.value),
                    value: point.value,
                })
                .collect(),
        })
        .collect()
}

/// Horizontal position of sample `index` out of `count`.
///
/// A single sample sits at the horizontal center.
#[must_use]
pub fn sample_x(index: usize, count: usize, width: f64) -> f64 {
    if count <= 1 {
        return width * 0.5;
    }
    index as f64 * (width / (count - 1) as f64)
}

/// Builds a stroke path through `points`.
///
/// Straight mode emits one `L` per gap, curved mode one `C` whose control
/// points sit at one and two thirds of the horizontal span with the y of the
/// nearer endpoint. A single point becomes a short horizontal stroke.
#[must_use]
pub fn line_path(points: &[Point], curve: CurveMode) -> PathData {
    let mut path = PathData::with_capacity(points.len().max(2));
    let Some((first, rest)) = points.split_first() else {
        return path;
    };

    if rest.is_empty() {
        path.move_to(Point::new(first.x - SINGLE_POINT_HALF_STROKE_PX, first.y))
            .line_to(Point::new(first.x + SINGLE_POINT_HALF_STROKE_PX, first.y));
        return path;
    }

    path.move_to(*first);
    append_segments(&mut path, points, curve);
    path
}

/// Appends the segments joining consecutive `points`, assuming the path
/// already sits at `points[0]`.
pub(crate) fn append_segments(path: &mut PathData, points: &[Point], curve: CurveMode) {
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        match curve {
            CurveMode::Straight => {
                path.line_to(to);
            }
            CurveMode::Curved => {
                let (control1, control2) = curve_controls(from, to);
                path.cubic_to(control1, control2, to);
            }
        }
    }
}

/// Control points for the curved segment between `from` and `to`.
#[must_use]
pub fn curve_controls(from: Point, to: Point) -> (Point, Point) {
    let span = to.x - from.x;
    (
        Point::new(from.x + span / 3.0, from.y),
        Point::new(from.x + span * 2.0 / 3.0, to.y),
    )
}

/// Maps raw values straight into line points for callers that do not
/// need the full normalization pass.
pub fn project_values(
    values: &[f64],
    max_value: f64,
    viewport: Viewport,
) -> ChartResult<Vec<LinePoint>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if let Some(bad) = values.iter().find(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "line value must be finite, got {bad}"
        )));
    }

    let value_scale = ValueScale::new(max_value, viewport.height_px())?;
    Ok(values
        .iter()
        .enumerate()
        .map(|(data_index, value)| LinePoint {
            data_index,
            x: sample_x(data_index, values.len(), viewport.width_px()),
            y: value_scale.inverted_position(*value),
            value: *value,
        })
        .collect())
}
