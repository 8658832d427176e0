use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::core::primitives::{Point, format_coord};

/// One path drawing command in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    /// Elliptical arc with equal radii, SVG `A` semantics.
    ArcTo {
        radius: f64,
        large_arc: bool,
        clockwise: bool,
        to: Point,
    },
    Close,
}

/// Renderer-agnostic path geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, clockwise: bool, to: Point) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            clockwise,
            to,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drawing segments after the leading move, excluding `Close`.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    PathCommand::LineTo(_) | PathCommand::CubicTo { .. } | PathCommand::ArcTo { .. }
                )
            })
            .count()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => control1.is_finite() && control2.is_finite() && to.is_finite(),
            PathCommand::ArcTo { radius, to, .. } => radius.is_finite() && to.is_finite(),
            PathCommand::Close => true,
        })
    }

    /// Serializes to SVG path data, e.g. `M0,10 L5,2 Z`.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 16);
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(out, "M{}", pair(p)),
                PathCommand::LineTo(p) => write!(out, "L{}", pair(p)),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => write!(
                    out,
                    "C{} {} {}",
                    pair(control1),
                    pair(control2),
                    pair(to)
                ),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    clockwise,
                    to,
                } => {
                    let r = format_coord(radius);
                    write!(
                        out,
                        "A{r},{r} 0 {} {} {}",
                        u8::from(large_arc),
                        u8::from(clockwise),
                        pair(to)
                    )
                }
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}

fn pair(point: Point) -> String {
    format!("{},{}", format_coord(point.x), format_coord(point.y))
}

#[cfg(test)]
mod tests {
    use super::PathData;
    use crate::core::primitives::Point;

    #[test]
    fn svg_output_uses_absolute_commands() {
        let mut path = PathData::new();
        path.move_to(Point::new(0.0, 10.0))
            .line_to(Point::new(5.0, 2.5))
            .cubic_to(Point::new(6.0, 2.5), Point::new(7.0, 1.0), Point::new(8.0, 1.0))
            .arc_to(4.0, false, true, Point::new(1.0, 1.0))
            .close();

        assert_eq!(
            path.to_svg(),
            "M0,10 L5,2.5 C6,2.5 7,1 8,1 A4,4 0 0 1 1,1 Z"
        );
        assert_eq!(path.segment_count(), 3);
    }
}
