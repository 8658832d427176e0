pub mod area_series;
pub mod bar_layout;
pub mod bar_series;
pub mod geometry;
pub mod line_series;
pub mod normalize;
pub mod path;
pub mod pie_series;
pub mod primitives;
pub mod scale;
pub mod types;

pub use area_series::{AreaGeometry, project_areas};
pub use bar_layout::{BarAxes, BarLayoutOptions, BarPlacement};
pub use bar_series::{BarRect, project_bars};
pub use geometry::ChartGeometry;
pub use line_series::{
    LineGeometry, LinePoint, curve_controls, line_path, project_lines, project_values, sample_x,
};
pub use normalize::{
    DEFAULT_MAX_VALUE, NormalizedChartData, compute_max_value, normalize, normalize_value,
    stacked_sum,
};
pub use path::{PathCommand, PathData};
pub use pie_series::{PieLayout, PieOptions, PieSlice, compute_pie_slices, slice_path};
pub use primitives::Point;
pub use scale::{CategoryBand, ValueScale};
pub use types::{
    BarMode, ChartInput, CurveMode, DataPoint, Orientation, Series, StackingMode, Viewport,
};
