use tracing::trace;

use crate::core::{
    ChartGeometry, NormalizedChartData, PieLayout, compute_pie_slices, project_areas,
    project_bars, project_lines, slice_path,
};
use crate::render::{Color, PathPrimitive, RectPrimitive, RenderFrame, resolve_color};

use super::{ChartConfig, ChartKind};

/// Computes target geometry for `data` under `config`.
///
/// Degenerate input collapses to [`ChartGeometry::Empty`].
#[must_use]
pub fn compute_geometry(data: &NormalizedChartData, config: ChartConfig) -> ChartGeometry {
    let viewport = config.viewport;
    let geometry = match config.kind {
        ChartKind::Bar => ChartGeometry::Bars {
            orientation: config.bar.orientation,
            rects: project_bars(data, viewport, config.bar),
        },
        ChartKind::Line => ChartGeometry::Lines {
            lines: project_lines(data, viewport, config.curve),
        },
        ChartKind::Area => ChartGeometry::Areas {
            areas: project_areas(data, viewport, config.curve),
        },
        ChartKind::Pie => {
            let points = data
                .series
                .first()
                .map(|series| series.data.as_slice())
                .unwrap_or_default();
            ChartGeometry::Pie {
                layout: PieLayout::fit(viewport, config.pie.inner_radius_percent),
                origin_angle: config.pie.start_angle,
                slices: compute_pie_slices(points, config.pie),
            }
        }
    };

    if geometry.is_empty() {
        trace!(kind = ?config.kind, "geometry is empty");
        return ChartGeometry::Empty;
    }
    geometry
}

/// Resolved fill/stroke color per visible series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesPalette {
    pub colors: Vec<Color>,
}

impl SeriesPalette {
    #[must_use]
    pub fn color(&self, series_index: usize) -> Color {
        self.colors
            .get(series_index)
            .copied()
            .unwrap_or_else(|| crate::render::palette_color(series_index))
    }
}

/// Materializes geometry into draw primitives.
#[must_use]
pub fn build_frame(
    geometry: &ChartGeometry,
    data: &NormalizedChartData,
    palette: &SeriesPalette,
    config: ChartConfig,
) -> RenderFrame {
    let mut frame = RenderFrame::new(config.viewport);
    match geometry {
        ChartGeometry::Empty => {}
        ChartGeometry::Bars { rects, .. } => {
            let per_point_colors = config.bar.mode == crate::core::BarMode::Simple;
            for rect in rects {
                let point_color = data
                    .series
                    .get(rect.series_index)
                    .and_then(|series| series.data.get(rect.data_index))
                    .and_then(|point| point.color.as_deref());
                let fill = match point_color {
                    Some(hex) if per_point_colors => Color::parse_hex(hex)
                        .unwrap_or_else(|_| palette.color(rect.series_index)),
                    _ => palette.color(rect.series_index),
                };
                let radius = if rect.rounded {
                    config
                        .bar
                        .corner_radius
                        .min(rect.width * 0.5)
                        .min(rect.height * 0.5)
                } else {
                    0.0
                };
                frame.rects.push(
                    RectPrimitive::new(rect.x, rect.y, rect.width, rect.height, fill)
                        .with_corner_radius(radius.max(0.0)),
                );
            }
        }
        ChartGeometry::Lines { lines } => {
            for line in lines {
                frame.paths.push(PathPrimitive::stroked(
                    line.path(),
                    palette.color(line.series_index),
                    config.line_width,
                ));
            }
        }
        ChartGeometry::Areas { areas } => {
            for area in areas {
                let color = palette.color(area.line.series_index);
                frame.paths.push(PathPrimitive::filled(
                    area.fill_path(),
                    color.with_alpha(config.area_fill_alpha),
                ));
                frame.paths.push(PathPrimitive::stroked(
                    area.line_path(),
                    color,
                    config.line_width,
                ));
            }
        }
        ChartGeometry::Pie { layout, slices, .. } => {
            for slice in slices {
                let path = slice_path(slice, *layout);
                if path.is_empty() {
                    continue;
                }
                let fill = resolve_color(slice.point.color.as_deref(), slice.source_index);
                frame.paths.push(PathPrimitive::filled(path, fill));
            }
        }
    }
    frame
}
