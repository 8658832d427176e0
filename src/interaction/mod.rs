//! Pointer hit testing over computed geometry, for hover and tooltips.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BarRect, ChartGeometry, LineGeometry, PieLayout, PieSlice, Point};

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HoverTarget {
    Bar {
        series_index: usize,
        data_index: usize,
    },
    LinePoint {
        series_index: usize,
        data_index: usize,
    },
    Slice {
        source_index: usize,
    },
}

/// Nearest sample of one line series to a pointer x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHit {
    pub series_index: usize,
    pub data_index: usize,
    pub position: Point,
    pub value: f64,
}

/// Topmost bar containing `(x, y)`.
#[must_use]
pub fn bar_at(rects: &[BarRect], x: f64, y: f64) -> Option<&BarRect> {
    rects.iter().rev().find(|rect| rect.contains(x, y))
}

/// Slice under `(x, y)`, honoring the donut hole.
#[must_use]
pub fn slice_at(slices: &[PieSlice], layout: PieLayout, x: f64, y: f64) -> Option<&PieSlice> {
    let pointer = Point::new(x, y);
    let distance = pointer.distance_to(layout.center);
    if !distance.is_finite() || distance > layout.outer_radius || distance < layout.inner_radius {
        return None;
    }

    let angle = pointer_angle(layout.center, pointer);
    slices.iter().find(|slice| {
        let offset = (angle - slice.start_angle).rem_euclid(360.0);
        slice.angle > 0.0 && (offset < slice.angle || slice.angle >= 360.0)
    })
}

/// Angle of `pointer` around `center` in degrees, `0` at 12 o'clock, clockwise.
#[must_use]
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    dx.atan2(-dy).to_degrees().rem_euclid(360.0)
}

/// Nearest sample to `x` in each series, ordered by series.
#[must_use]
pub fn nearest_line_points(lines: &[LineGeometry], x: f64) -> SmallVec<[LineHit; 4]> {
    let mut hits = SmallVec::new();
    if !x.is_finite() {
        return hits;
    }
    for line in lines {
        let nearest = line
            .points
            .iter()
            .min_by_key(|point| OrderedFloat((point.x - x).abs()));
        if let Some(point) = nearest {
            hits.push(LineHit {
                series_index: line.series_index,
                data_index: point.data_index,
                position: point.position(),
                value: point.value,
            });
        }
    }
    hits
}

/// Single nearest sample across all series, ties going to the earlier series.
#[must_use]
pub fn nearest_line_point(lines: &[LineGeometry], x: f64, y: f64) -> Option<LineHit> {
    let pointer = Point::new(x, y);
    nearest_line_points(lines, x)
        .into_iter()
        .min_by_key(|hit| OrderedFloat(hit.position.distance_to(pointer)))
}

/// Resolves the hover target for any chart geometry.
#[must_use]
pub fn hit_test(geometry: &ChartGeometry, x: f64, y: f64) -> Option<HoverTarget> {
    match geometry {
        ChartGeometry::Empty => None,
        ChartGeometry::Bars { rects, .. } => bar_at(rects, x, y).map(|rect| HoverTarget::Bar {
            series_index: rect.series_index,
            data_index: rect.data_index,
        }),
        ChartGeometry::Lines { lines } => line_target(nearest_line_point(lines, x, y)),
        ChartGeometry::Areas { areas } => {
            let lines: Vec<LineGeometry> = areas.iter().map(|area| area.line.clone()).collect();
            line_target(nearest_line_point(&lines, x, y))
        }
        ChartGeometry::Pie { layout, slices, .. } => {
            slice_at(slices, *layout, x, y).map(|slice| HoverTarget::Slice {
                source_index: slice.source_index,
            })
        }
    }
}

fn line_target(hit: Option<LineHit>) -> Option<HoverTarget> {
    hit.map(|hit| HoverTarget::LinePoint {
        series_index: hit.series_index,
        data_index: hit.data_index,
    })
}

/// Hover state exposed to host applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub pointer: Option<Point>,
    pub target: Option<HoverTarget>,
}

impl HoverState {
    /// Updates the pointer and returns `true` when the hovered target changed.
    pub fn on_pointer_move(&mut self, geometry: &ChartGeometry, x: f64, y: f64) -> bool {
        let target = hit_test(geometry, x, y);
        self.pointer = Some(Point::new(x, y));
        let changed = target != self.target;
        self.target = target;
        changed
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.target = None;
    }
}
