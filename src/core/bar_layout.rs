use serde::{Deserialize, Serialize};

use crate::core::scale::{CategoryBand, ValueScale};
use crate::core::types::{BarMode, Orientation, Viewport};
use crate::error::ChartResult;

const MAX_GAP_RATIO: f64 = 0.95;

/// Bar layout tuning shared by simple, stacked and grouped bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayoutOptions {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub mode: BarMode,
    /// Fraction of each category slot left empty.
    #[serde(default = "default_bar_gap")]
    pub bar_gap: f64,
    /// Fraction of a group left empty between grouped bars.
    #[serde(default = "default_group_gap")]
    pub group_gap: f64,
    #[serde(default)]
    pub max_bar_width: Option<f64>,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
}

impl Default for BarLayoutOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            mode: BarMode::Simple,
            bar_gap: default_bar_gap(),
            group_gap: default_group_gap(),
            max_bar_width: None,
            corner_radius: default_corner_radius(),
        }
    }
}

impl BarLayoutOptions {
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: BarMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_bar_gap(mut self, bar_gap: f64) -> Self {
        self.bar_gap = bar_gap;
        self
    }

    #[must_use]
    pub fn with_group_gap(mut self, group_gap: f64) -> Self {
        self.group_gap = group_gap;
        self
    }

    #[must_use]
    pub fn with_max_bar_width(mut self, max_bar_width: f64) -> Self {
        self.max_bar_width = Some(max_bar_width);
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub(crate) fn clamped_bar_gap(self) -> f64 {
        clamp_gap(self.bar_gap)
    }

    #[must_use]
    pub(crate) fn clamped_group_gap(self) -> f64 {
        clamp_gap(self.group_gap)
    }
}

fn default_bar_gap() -> f64 {
    0.2
}

fn default_group_gap() -> f64 {
    0.1
}

fn default_corner_radius() -> f64 {
    4.0
}

fn clamp_gap(gap: f64) -> f64 {
    if gap.is_finite() {
        gap.clamp(0.0, MAX_GAP_RATIO)
    } else {
        0.0
    }
}

/// Band + value position of one bar before orientation is applied.
///
/// `band_offset`/`band_thickness` run along the category axis,
/// `value_start`/`value_end` along the value axis (pixels from the baseline).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPlacement {
    pub band_offset: f64,
    pub band_thickness: f64,
    pub value_start: f64,
    pub value_end: f64,
}

/// Axis extents and scales resolved for one viewport and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarAxes {
    pub orientation: Orientation,
    pub band: CategoryBand,
    pub value_scale: ValueScale,
}

impl BarAxes {
    /// Vertical bars slot categories across the width and grow upwards;
    /// horizontal bars swap the two axes.
    pub fn resolve(
        viewport: Viewport,
        orientation: Orientation,
        category_count: usize,
        max_value: f64,
    ) -> ChartResult<Self> {
        let (category_extent, value_extent) = match orientation {
            Orientation::Vertical => (viewport.width_px(), viewport.height_px()),
            Orientation::Horizontal => (viewport.height_px(), viewport.width_px()),
        };
        Ok(Self {
            orientation,
            band: CategoryBand::new(category_count, category_extent)?,
            value_scale: ValueScale::new(max_value, value_extent)?,
        })
    }

    /// Single-series bar centered in its slot.
    #[must_use]
    pub fn simple(self, index: usize, value: f64, options: BarLayoutOptions) -> BarPlacement {
        let thickness = self
            .band
            .bar_width(options.clamped_bar_gap(), options.max_bar_width);
        BarPlacement {
            band_offset: self.centered_offset(index, thickness),
            band_thickness: thickness,
            value_start: 0.0,
            value_end: self.value_scale.length(value),
        }
    }

    /// Stacked segment starting `start_px` along the value axis, clamped to the
    /// axis extent.
    #[must_use]
    pub fn stacked(
        self,
        index: usize,
        start_px: f64,
        value: f64,
        options: BarLayoutOptions,
    ) -> BarPlacement {
        let thickness = self
            .band
            .bar_width(options.clamped_bar_gap(), options.max_bar_width);
        let extent = self.value_scale.extent_px();
        let value_start = start_px.clamp(0.0, extent);
        let value_end = (value_start + self.value_scale.length(value)).min(extent);
        BarPlacement {
            band_offset: self.centered_offset(index, thickness),
            band_thickness: thickness,
            value_start,
            value_end,
        }
    }

    /// Grouped bar for `series_index` out of `series_count` sharing one slot.
    #[must_use]
    pub fn grouped(
        self,
        index: usize,
        series_index: usize,
        series_count: usize,
        value: f64,
        options: BarLayoutOptions,
    ) -> BarPlacement {
        let series_count = series_count.max(1);
        let group_width = self
            .band
            .bar_width(options.clamped_bar_gap(), options.max_bar_width);
        let group_start = self.centered_offset(index, group_width);
        let sub_slot = group_width / series_count as f64;
        let thickness = group_width * (1.0 - options.clamped_group_gap()) / series_count as f64;
        BarPlacement {
            band_offset: group_start + series_index as f64 * sub_slot + (sub_slot - thickness) * 0.5,
            band_thickness: thickness,
            value_start: 0.0,
            value_end: self.value_scale.length(value),
        }
    }

    /// Converts a placement into a `(x, y, width, height)` pixel rectangle.
    #[must_use]
    pub fn to_rect(self, placement: BarPlacement) -> (f64, f64, f64, f64) {
        let length = (placement.value_end - placement.value_start).max(0.0);
        match self.orientation {
            Orientation::Vertical => (
                placement.band_offset,
                self.value_scale.extent_px() - placement.value_end,
                placement.band_thickness,
                length,
            ),
            Orientation::Horizontal => (
                placement.value_start,
                placement.band_offset,
                length,
                placement.band_thickness,
            ),
        }
    }

    fn centered_offset(self, index: usize, thickness: f64) -> f64 {
        self.band.slot_start(index) + (self.band.slot_width() - thickness) * 0.5
    }
}
