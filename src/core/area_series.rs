use serde::{Deserialize, Serialize};

use crate::core::line_series::{LineGeometry, append_segments, line_path, project_lines};
use crate::core::normalize::NormalizedChartData;
use crate::core::path::{PathCommand, PathData};
use crate::core::primitives::Point;
use crate::core::types::{CurveMode, Viewport};

/// Deterministic geometry for an area series.
///
/// `line` strokes the samples, `fill` is the same outline closed against
/// the baseline at `baseline_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line: LineGeometry,
    pub baseline_y: f64,
}

impl AreaGeometry {
    #[must_use]
    pub fn line_path(&self) -> PathData {
        self.line.path()
    }

    /// Closed, fillable outline: baseline under the first sample, the
    /// samples, baseline under the last sample, then back.
    #[must_use]
    pub fn fill_path(&self) -> PathData {
        let positions = self.positions();
        let (Some(first), Some(last)) = (positions.first(), positions.last()) else {
            return PathData::new();
        };

        let mut path = PathData::with_capacity(positions.len() + 4);
        if positions.len() == 1 {
            // Give the single-sample stroke a fillable width.
            let stroke = line_path(&positions, self.line.curve);
            let (Some(PathCommand::MoveTo(start)), Some(PathCommand::LineTo(end))) =
                (stroke.commands.first().copied(), stroke.commands.last().copied())
            else {
                return PathData::new();
            };
            path.move_to(Point::new(start.x, self.baseline_y))
                .line_to(start)
                .line_to(end)
                .line_to(Point::new(end.x, self.baseline_y))
                .close();
            return path;
        }

        path.move_to(Point::new(first.x, self.baseline_y));
        path.line_to(*first);
        append_segments(&mut path, &positions, self.line.curve);
        path.line_to(Point::new(last.x, self.baseline_y)).close();
        path
    }

    /// Straight-edged polygon against the baseline, explicitly closed by
    /// repeating the first vertex.
    #[must_use]
    pub fn fill_polygon(&self) -> Vec<Point> {
        let positions = self.positions();
        let (Some(first), Some(last)) = (positions.first().copied(), positions.last().copied())
        else {
            return Vec::new();
        };

        let mut polygon = Vec::with_capacity(positions.len() + 3);
        polygon.push(Point::new(first.x, self.baseline_y));
        polygon.extend(positions);
        polygon.push(Point::new(last.x, self.baseline_y));
        polygon.push(Point::new(first.x, self.baseline_y));
        polygon
    }

    #[must_use]
    pub fn collapsed(&self) -> Self {
        Self {
            line: self.line.collapsed(self.baseline_y),
            baseline_y: self.baseline_y,
        }
    }

    fn positions(&self) -> Vec<Point> {
        self.line.points.iter().map(|p| p.position()).collect()
    }
}

/// Projects every series into area geometry anchored at the viewport bottom.
#[must_use]
pub fn project_areas(
    data: &NormalizedChartData,
    viewport: Viewport,
    curve: CurveMode,
) -> Vec<AreaGeometry> {
    let baseline_y = viewport.height_px();
    project_lines(data, viewport, curve)
        .into_iter()
        .map(|line| AreaGeometry { line, baseline_y })
        .collect()
}
