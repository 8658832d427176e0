use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Maps values in `[0, max_value]` onto a pixel length in `[0, extent_px]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    max_value: f64,
    extent_px: f64,
}

impl ValueScale {
    pub fn new(max_value: f64, extent_px: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ChartError::DegenerateGeometry(format!(
                "scale maximum must be finite and > 0, got {max_value}"
            )));
        }
        if !extent_px.is_finite() || extent_px <= 0.0 {
            return Err(ChartError::DegenerateGeometry(format!(
                "scale extent must be finite and > 0, got {extent_px}"
            )));
        }

        Ok(Self {
            max_value,
            extent_px,
        })
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn extent_px(self) -> f64 {
        self.extent_px
    }

    /// Pixel length for `value`; negative values map to zero.
    #[must_use]
    pub fn length(self, value: f64) -> f64 {
        value.max(0.0) / self.max_value * self.extent_px
    }

    /// Pixel position measured from the far edge, as used for vertical y axes.
    ///
    /// Values are not clamped here so lines can dip below the baseline.
    #[must_use]
    pub fn inverted_position(self, value: f64) -> f64 {
        self.extent_px - value / self.max_value * self.extent_px
    }

    #[must_use]
    pub fn value_at(self, length_px: f64) -> f64 {
        length_px / self.extent_px * self.max_value
    }
}

/// Evenly divided category slots along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBand {
    count: usize,
    extent_px: f64,
}

impl CategoryBand {
    pub fn new(count: usize, extent_px: f64) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::DegenerateGeometry(
                "category band needs at least one category".to_owned(),
            ));
        }
        if !extent_px.is_finite() || extent_px <= 0.0 {
            return Err(ChartError::DegenerateGeometry(format!(
                "category extent must be finite and > 0, got {extent_px}"
            )));
        }

        Ok(Self { count, extent_px })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn slot_width(self) -> f64 {
        self.extent_px / self.count as f64
    }

    #[must_use]
    pub fn slot_start(self, index: usize) -> f64 {
        index as f64 * self.slot_width()
    }

    #[must_use]
    pub fn slot_center(self, index: usize) -> f64 {
        self.slot_start(index) + self.slot_width() * 0.5
    }

    /// Bar thickness inside one slot: `slot * (1 - gap)`, capped by `max_bar_width`.
    #[must_use]
    pub fn bar_width(self, gap: f64, max_bar_width: Option<f64>) -> f64 {
        let width = self.slot_width() * (1.0 - gap);
        match max_bar_width {
            Some(max) if max.is_finite() && max > 0.0 => width.min(max),
            _ => width,
        }
    }

    /// Slot index containing `position`, if any.
    #[must_use]
    pub fn index_at(self, position: f64) -> Option<usize> {
        if !position.is_finite() || position < 0.0 || position >= self.extent_px {
            return None;
        }
        let index = (position / self.slot_width()).floor() as usize;
        Some(index.min(self.count - 1))
    }
}
