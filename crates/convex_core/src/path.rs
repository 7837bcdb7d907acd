//! Vector paths
//!
//! A [`Path`] is a flat list of line and cubic commands built with a
//! chainable API. Paths are plain values: they are rebuilt every frame and
//! never mutated in place by the renderer.

use std::fmt::Write as _;

use crate::geometry::{Point, Rect};

/// Cubic Bézier circle approximation constant
const KAPPA: f32 = 0.5522847498;

/// A single path segment
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier from the current point
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    fn map_points(&self, f: impl Fn(Point) -> Point) -> PathCommand {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicTo {
                control1: f(control1),
                control2: f(control2),
                end: f(end),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }

    /// Every point the command carries, controls included
    fn points(&self) -> impl Iterator<Item = Point> {
        let points = match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => [Some(p), None, None],
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => [Some(control1), Some(control2), Some(end)],
            PathCommand::Close => [None; 3],
        };
        points.into_iter().flatten()
    }
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(self, x: f32, y: f32) -> Self {
        self.with(PathCommand::MoveTo(Point::new(x, y)))
    }

    pub fn line_to(self, x: f32, y: f32) -> Self {
        self.with(PathCommand::LineTo(Point::new(x, y)))
    }

    /// Cubic Bézier from the current point through two controls to `(x, y)`
    pub fn cubic_to(self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.with(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        })
    }

    pub fn close(self) -> Self {
        self.with(PathCommand::Close)
    }

    fn with(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Circle made of four quarter arcs, starting at its rightmost point
    pub fn circle(center: Point, radius: f32) -> Self {
        let k = radius * KAPPA;
        let at = |(ux, uy): (f32, f32)| center.offset(ux * radius, uy * radius);
        // Unit directions of the quarter points, clockwise in y-down space
        let quarters = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (1.0, 0.0)];

        let mut path = Self::new().move_to(center.x + radius, center.y);
        for pair in quarters.windows(2) {
            let ((fx, fy), (tx, ty)) = (pair[0], pair[1]);
            // Tangent at a unit direction (x, y) is (-y, x)
            let c1 = at((fx, fy)).offset(-fy * k, fx * k);
            let c2 = at((tx, ty)).offset(ty * k, -tx * k);
            let end = at((tx, ty));
            path = path.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
        }
        path.close()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the last command closes the subpath
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// First point of the path
    pub fn start_point(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) | Some(PathCommand::LineTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Point where the pen rests after the last command.
    ///
    /// A closed path ends back at the start of its subpath.
    pub fn end_point(&self) -> Option<Point> {
        let mut subpath_start = None;
        let mut pen = None;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(*p);
                    pen = Some(*p);
                }
                PathCommand::LineTo(p) | PathCommand::CubicTo { end: p, .. } => pen = Some(*p),
                PathCommand::Close => pen = subpath_start,
            }
        }
        pen
    }

    /// Bounding rectangle of the control polygon; `Rect::ZERO` if empty or
    /// not finite
    pub fn bounds(&self) -> Rect {
        let mut points = self.commands.iter().flat_map(PathCommand::points);
        let Some(first) = points.next() else {
            return Rect::ZERO;
        };
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });

        if [min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite()) {
            Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
        } else {
            Rect::ZERO
        }
    }

    /// Copy of the path moved by `(dx, dy)`
    pub fn translated(&self, dx: f32, dy: f32) -> Path {
        Path {
            commands: self
                .commands
                .iter()
                .map(|cmd| cmd.map_points(|p| p.offset(dx, dy)))
                .collect(),
        }
    }

    /// Flatten the path into a polyline, sampling each curve `segments` times
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let mut points = Vec::new();
        let mut pen = Point::ZERO;
        let mut subpath_start = Point::ZERO;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = p;
                    pen = p;
                    points.push(p);
                }
                PathCommand::LineTo(p) => {
                    pen = p;
                    points.push(p);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    points.extend((1..=segments).map(|i| {
                        cubic_point(pen, control1, control2, end, i as f32 / segments as f32)
                    }));
                    pen = end;
                }
                PathCommand::Close => {
                    pen = subpath_start;
                    points.push(subpath_start);
                }
            }
        }

        points
    }

    /// SVG path data (the `d` attribute)
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(out, "M{} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(out, "L{} {}", p.x, p.y),
                PathCommand::CubicTo {
                    control1: a,
                    control2: b,
                    end: c,
                } => write!(out, "C{} {} {} {} {} {}", a.x, a.y, b.x, b.y, c.x, c.y),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}

/// Evaluate a cubic Bézier at `t`
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}
