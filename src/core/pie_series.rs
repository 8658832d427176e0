use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::path::PathData;
use crate::core::primitives::Point;
use crate::core::types::{DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};

const FULL_CIRCLE_DEG: f64 = 360.0;
const FULL_CIRCLE_EPSILON_DEG: f64 = 1e-9;

/// Pie/donut tuning. Angles are degrees, `0` at 12 o'clock, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieOptions {
    #[serde(default)]
    pub start_angle: f64,
    #[serde(default = "default_end_angle")]
    pub end_angle: f64,
    /// Gap inserted between consecutive slices.
    #[serde(default)]
    pub pad_angle: f64,
    #[serde(default = "default_sort_slices")]
    pub sort_slices: bool,
    /// Donut hole as a percentage of the outer radius; `0` draws a pie.
    #[serde(default)]
    pub inner_radius_percent: f64,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: default_end_angle(),
            pad_angle: 0.0,
            sort_slices: default_sort_slices(),
            inner_radius_percent: 0.0,
        }
    }
}

impl PieOptions {
    #[must_use]
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    #[must_use]
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    #[must_use]
    pub fn with_sort_slices(mut self, sort_slices: bool) -> Self {
        self.sort_slices = sort_slices;
        self
    }

    #[must_use]
    pub fn with_inner_radius_percent(mut self, percent: f64) -> Self {
        self.inner_radius_percent = percent;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("start_angle", self.start_angle),
            ("end_angle", self.end_angle),
            ("pad_angle", self.pad_angle),
            ("inner_radius_percent", self.inner_radius_percent),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "pie option `{name}` must be finite"
                )));
            }
        }
        if self.pad_angle < 0.0 {
            return Err(ChartError::InvalidData(
                "pie pad angle must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_end_angle() -> f64 {
    FULL_CIRCLE_DEG
}

fn default_sort_slices() -> bool {
    true
}

/// One pie slice with its allocated sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Position of the source point in the caller's input.
    pub source_index: usize,
    pub point: DataPoint,
    pub start_angle: f64,
    pub angle: f64,
    /// Share of the total in `[0, 100]`.
    pub percentage: f64,
}

impl PieSlice {
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.angle
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.angle * 0.5
    }

    /// Zero-sweep slice parked at `origin_angle`, used as an entry keyframe.
    #[must_use]
    pub fn collapsed(&self, origin_angle: f64) -> Self {
        Self {
            start_angle: origin_angle,
            angle: 0.0,
            ..self.clone()
        }
    }
}

/// Allocates slice angles for the positive values in `points`.
///
/// Non-positive and non-finite values are dropped. With `sort_slices` the
/// slices are ordered by descending value; the sort is stable so ties keep
/// input order. Returns no slices when nothing positive remains.
#[must_use]
pub fn compute_pie_slices(points: &[DataPoint], options: PieOptions) -> Vec<PieSlice> {
    let mut valid: Vec<(usize, &DataPoint)> = points
        .iter()
        .enumerate()
        .filter(|(_, point)| point.value.is_finite() && point.value > 0.0)
        .collect();
    if valid.len() < points.len() {
        debug!(
            dropped = points.len() - valid.len(),
            "dropping non-positive pie values"
        );
    }
    if valid.is_empty() {
        return Vec::new();
    }

    if options.sort_slices {
        valid.sort_by_key(|(_, point)| Reverse(OrderedFloat(point.value)));
    }

    let total: f64 = valid.iter().map(|(_, point)| point.value).sum();
    let available = options.end_angle - options.start_angle;
    let pad_angle = options.pad_angle.max(0.0);
    let total_padding = pad_angle * (valid.len() - 1) as f64;
    let sweepable = (available - total_padding).max(0.0);

    let mut current_angle = options.start_angle;
    let mut slices = Vec::with_capacity(valid.len());
    for (source_index, point) in valid {
        let percentage = point.value / total * 100.0;
        let angle = percentage / 100.0 * sweepable;
        slices.push(PieSlice {
            source_index,
            point: point.clone(),
            start_angle: current_angle,
            angle,
            percentage,
        });
        current_angle += angle + pad_angle;
    }
    slices
}

/// Center and radii used to turn slices into arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl PieLayout {
    /// Donut inner radius is `outer * percent / 100`, percent clamped to `[0, 100]`.
    #[must_use]
    pub fn new(center: Point, outer_radius: f64, inner_radius_percent: f64) -> Self {
        let outer_radius = outer_radius.max(0.0);
        let percent = if inner_radius_percent.is_finite() {
            inner_radius_percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            center,
            outer_radius,
            inner_radius: outer_radius * percent / 100.0,
        }
    }

    /// Largest circle centered in the viewport.
    #[must_use]
    pub fn fit(viewport: Viewport, inner_radius_percent: f64) -> Self {
        let width = viewport.width_px();
        let height = viewport.height_px();
        Self::new(
            Point::new(width * 0.5, height * 0.5),
            width.min(height) * 0.5,
            inner_radius_percent,
        )
    }

    #[must_use]
    pub fn is_donut(self) -> bool {
        self.inner_radius > 0.0
    }

    /// Point at `radius` and `angle_deg` around the center.
    #[must_use]
    pub fn polar(self, radius: f64, angle_deg: f64) -> Point {
        let radians = angle_deg.to_radians();
        Point::new(
            self.center.x + radius * radians.sin(),
            self.center.y - radius * radians.cos(),
        )
    }

    /// Label anchor at the slice's mid angle, halfway across the ring.
    #[must_use]
    pub fn label_anchor(self, slice: &PieSlice) -> Point {
        self.polar((self.inner_radius + self.outer_radius) * 0.5, slice.mid_angle())
    }
}

/// Builds the closed outline of one slice.
///
/// Pie slices are wedges from the center; donut slices are ring segments.
/// A slice covering the full circle is drawn as two half arcs since a single
/// SVG arc cannot start and end on the same point.
#[must_use]
pub fn slice_path(slice: &PieSlice, layout: PieLayout) -> PathData {
    let mut path = PathData::with_capacity(6);
    if slice.angle.is_nan() || slice.angle <= 0.0 || layout.outer_radius <= 0.0 {
        return path;
    }

    let outer = layout.outer_radius;
    let inner = layout.inner_radius;
    let start = slice.start_angle;
    let end = slice.end_angle();

    if slice.angle >= FULL_CIRCLE_DEG - FULL_CIRCLE_EPSILON_DEG {
        let half = start + FULL_CIRCLE_DEG * 0.5;
        path.move_to(layout.polar(outer, start))
            .arc_to(outer, false, true, layout.polar(outer, half))
            .arc_to(outer, false, true, layout.polar(outer, start))
            .close();
        if layout.is_donut() {
            path.move_to(layout.polar(inner, start))
                .arc_to(inner, false, false, layout.polar(inner, half))
                .arc_to(inner, false, false, layout.polar(inner, start))
                .close();
        }
        return path;
    }

    let large_arc = slice.angle > FULL_CIRCLE_DEG * 0.5;
    if layout.is_donut() {
        path.move_to(layout.polar(outer, start))
            .arc_to(outer, large_arc, true, layout.polar(outer, end))
            .line_to(layout.polar(inner, end))
            .arc_to(inner, large_arc, false, layout.polar(inner, start))
            .close();
    } else {
        path.move_to(layout.center)
            .line_to(layout.polar(outer, start))
            .arc_to(outer, large_arc, true, layout.polar(outer, end))
            .close();
    }
    path
}
