use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::bar_layout::{BarAxes, BarLayoutOptions};
use crate::core::normalize::{NormalizedChartData, compute_max_value};
use crate::core::types::{BarMode, Orientation, Series, Viewport};

/// Deterministic bar rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub series_index: usize,
    pub data_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    /// Whether the outer end of the bar carries the rounded corner.
    pub rounded: bool,
}

impl BarRect {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Same bar shrunk to zero length at its baseline edge.
    #[must_use]
    pub fn collapsed(&self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => Self {
                y: self.y + self.height,
                height: 0.0,
                ..*self
            },
            Orientation::Horizontal => Self {
                width: 0.0,
                ..*self
            },
        }
    }
}

/// Projects normalized data into bar rectangles.
///
/// Produces one rect per `(series, data index)` pair for stacked and grouped
/// modes and one rect per point of the first series in simple mode. The value
/// axis is scaled to the series actually drawn, stacked per category in
/// stacked mode, regardless of how `data` was normalized. Empty data or a
/// degenerate viewport yields no bars.
#[must_use]
pub fn project_bars(
    data: &NormalizedChartData,
    viewport: Viewport,
    options: BarLayoutOptions,
) -> Vec<BarRect> {
    let series: &[Series] = match options.mode {
        BarMode::Simple => data.series.get(..1).unwrap_or(&[]),
        BarMode::Stacked | BarMode::Grouped => &data.series,
    };
    let category_count = series.iter().map(|s| s.data.len()).max().unwrap_or(0);
    let max_value = compute_max_value(series, options.mode.into());

    let axes = match BarAxes::resolve(viewport, options.orientation, category_count, max_value) {
        Ok(axes) => axes,
        Err(err) => {
            debug!(error = %err, "no bar geometry");
            return Vec::new();
        }
    };

    match options.mode {
        BarMode::Simple => project_simple(&series[0], axes, options),
        BarMode::Stacked => project_stacked(series, axes, options),
        BarMode::Grouped => project_grouped(series, axes, options),
    }
}

fn project_simple(series: &Series, axes: BarAxes, options: BarLayoutOptions) -> Vec<BarRect> {
    let build = |(index, point): (usize, &crate::core::DataPoint)| {
        let placement = axes.simple(index, point.value, options);
        rect_from(axes, placement, 0, index, point.value, true)
    };

    #[cfg(feature = "parallel-projection")]
    {
        series.data.par_iter().enumerate().map(build).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        series.data.iter().enumerate().map(build).collect()
    }
}

fn project_stacked(series: &[Series], axes: BarAxes, options: BarLayoutOptions) -> Vec<BarRect> {
    let mut rects = Vec::with_capacity(series.len() * axes.band.count());
    for index in 0..axes.band.count() {
        let top_series = series.iter().rposition(|s| index < s.data.len());
        let mut stacked_px = 0.0;
        for (series_index, entry) in series.iter().enumerate() {
            let Some(point) = entry.data.get(index) else {
                continue;
            };
            let placement = axes.stacked(index, stacked_px, point.value, options);
            stacked_px = placement.value_end;
            rects.push(rect_from(
                axes,
                placement,
                series_index,
                index,
                point.value,
                top_series == Some(series_index),
            ));
        }
    }
    rects
}

fn project_grouped(series: &[Series], axes: BarAxes, options: BarLayoutOptions) -> Vec<BarRect> {
    let series_count = series.len();
    let mut rects = Vec::with_capacity(series_count * axes.band.count());
    for (series_index, entry) in series.iter().enumerate() {
        for (index, point) in entry.data.iter().enumerate() {
            let placement = axes.grouped(index, series_index, series_count, point.value, options);
            rects.push(rect_from(
                axes,
                placement,
                series_index,
                index,
                point.value,
                true,
            ));
        }
    }
    rects
}

fn rect_from(
    axes: BarAxes,
    placement: crate::core::bar_layout::BarPlacement,
    series_index: usize,
    data_index: usize,
    value: f64,
    rounded: bool,
) -> BarRect {
    let (x, y, width, height) = axes.to_rect(placement);
    BarRect {
        series_index,
        data_index,
        x,
        y,
        width,
        height,
        value,
        rounded,
    }
}
