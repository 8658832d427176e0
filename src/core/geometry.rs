use serde::{Deserialize, Serialize};

use crate::core::area_series::AreaGeometry;
use crate::core::bar_series::BarRect;
use crate::core::line_series::LineGeometry;
use crate::core::pie_series::{PieLayout, PieSlice};
use crate::core::types::Orientation;

/// Complete geometry for one render pass of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartGeometry {
    /// Nothing to draw; hosts show their empty-state placeholder.
    Empty,
    Bars {
        orientation: Orientation,
        rects: Vec<BarRect>,
    },
    Lines {
        lines: Vec<LineGeometry>,
    },
    Areas {
        areas: Vec<AreaGeometry>,
    },
    Pie {
        layout: PieLayout,
        /// Angle that collapsed slices sweep out from.
        origin_angle: f64,
        slices: Vec<PieSlice>,
    },
}

impl ChartGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Bars { rects, .. } => rects.is_empty(),
            Self::Lines { lines } => lines.is_empty(),
            Self::Areas { areas } => areas.is_empty(),
            Self::Pie { slices, .. } => slices.is_empty(),
        }
    }

    /// Entry keyframe: bars at zero length, lines on the baseline and
    /// slices with zero sweep.
    #[must_use]
    pub fn collapsed(&self, baseline_y: f64) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Bars { orientation, rects } => Self::Bars {
                orientation: *orientation,
                rects: rects.iter().map(|r| r.collapsed(*orientation)).collect(),
            },
            Self::Lines { lines } => Self::Lines {
                lines: lines.iter().map(|l| l.collapsed(baseline_y)).collect(),
            },
            Self::Areas { areas } => Self::Areas {
                areas: areas.iter().map(AreaGeometry::collapsed).collect(),
            },
            Self::Pie {
                layout,
                origin_angle,
                slices,
            } => Self::Pie {
                layout: *layout,
                origin_angle: *origin_angle,
                slices: slices.iter().map(|s| s.collapsed(*origin_angle)).collect(),
            },
        }
    }

    /// Whether two geometries can be blended element by element.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
