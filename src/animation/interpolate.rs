use std::collections::HashMap;

use crate::animation::easing::Easing;
use crate::core::{
    AreaGeometry, BarRect, ChartGeometry, LineGeometry, LinePoint, PieLayout, PieSlice, Point,
};

/// Geometry that can be blended towards a target.
///
/// `t` is already eased; implementations only blend numbers. Discrete
/// fields (indices, flags, labels) are taken from `to`.
pub trait Interpolate: Clone {
    #[must_use]
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

/// Blends `from` towards `to` at linear progress `elapsed_fraction`.
///
/// Returns exact clones of the endpoints at `t <= 0` and `t >= 1`, so a
/// finished animation carries no floating-point residue.
#[must_use]
pub fn interpolate<G: Interpolate>(from: &G, to: &G, elapsed_fraction: f64, easing: Easing) -> G {
    if elapsed_fraction.is_nan() || elapsed_fraction <= 0.0 {
        return from.clone();
    }
    if elapsed_fraction >= 1.0 {
        return to.clone();
    }
    from.lerp(to, easing.apply(elapsed_fraction))
}

#[inline]
fn mix(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

impl Interpolate for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        mix(*self, *to, t)
    }
}

impl Interpolate for Point {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self::new(mix(self.x, to.x, t), mix(self.y, to.y, t))
    }
}

impl Interpolate for BarRect {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            x: mix(self.x, to.x, t),
            y: mix(self.y, to.y, t),
            width: mix(self.width, to.width, t),
            height: mix(self.height, to.height, t),
            value: mix(self.value, to.value, t),
            ..*to
        }
    }
}

impl Interpolate for LinePoint {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            x: mix(self.x, to.x, t),
            y: mix(self.y, to.y, t),
            value: mix(self.value, to.value, t),
            ..*to
        }
    }
}

impl Interpolate for LineGeometry {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            series_index: to.series_index,
            curve: to.curve,
            points: self.points.lerp(&to.points, t),
        }
    }
}

impl Interpolate for AreaGeometry {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            line: self.line.lerp(&to.line, t),
            baseline_y: mix(self.baseline_y, to.baseline_y, t),
        }
    }
}

impl Interpolate for PieSlice {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            source_index: to.source_index,
            point: to.point.clone(),
            start_angle: mix(self.start_angle, to.start_angle, t),
            angle: mix(self.angle, to.angle, t),
            percentage: mix(self.percentage, to.percentage, t),
        }
    }
}

impl Interpolate for PieLayout {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            center: self.center.lerp(&to.center, t),
            outer_radius: mix(self.outer_radius, to.outer_radius, t),
            inner_radius: mix(self.inner_radius, to.inner_radius, t),
        }
    }
}

/// Pairs elements by position. Target elements without a counterpart appear
/// at their target value; surplus source elements are dropped.
impl<T: Interpolate> Interpolate for Vec<T> {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        to.iter()
            .enumerate()
            .map(|(index, target)| match self.get(index) {
                Some(source) => source.lerp(target, t),
                None => target.clone(),
            })
            .collect()
    }
}

/// Pairs slices by `source_index` so a reordered pie morphs each slice from
/// its own previous arc. Slices new to the target grow from zero sweep at
/// their target start angle.
fn lerp_slices(from: &[PieSlice], to: &[PieSlice], t: f64) -> Vec<PieSlice> {
    let sources: HashMap<usize, &PieSlice> = from
        .iter()
        .map(|slice| (slice.source_index, slice))
        .collect();
    to.iter()
        .map(|target| match sources.get(&target.source_index) {
            Some(source) => source.lerp(target, t),
            None => target.collapsed(target.start_angle).lerp(target, t),
        })
        .collect()
}

impl Interpolate for ChartGeometry {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        match (self, to) {
            (Self::Bars { rects: from, .. }, Self::Bars { orientation, rects }) => Self::Bars {
                orientation: *orientation,
                rects: from.lerp(rects, t),
            },
            (Self::Lines { lines: from }, Self::Lines { lines }) => Self::Lines {
                lines: from.lerp(lines, t),
            },
            (Self::Areas { areas: from }, Self::Areas { areas }) => Self::Areas {
                areas: from.lerp(areas, t),
            },
            (
                Self::Pie {
                    layout: from_layout,
                    slices: from,
                    ..
                },
                Self::Pie {
                    layout,
                    origin_angle,
                    slices,
                },
            ) => Self::Pie {
                layout: from_layout.lerp(layout, t),
                origin_angle: *origin_angle,
                slices: lerp_slices(from, slices, t),
            },
            // Different chart kinds cannot be blended.
            _ => to.clone(),
        }
    }
}
