//! Convex curve geometry
//!
//! The convex shape is a bump on a horizontal baseline, built from two cubic
//! Bézier halves. Each half starts and ends with a horizontal tangent, so the
//! bump meets the baseline smoothly and peaks exactly at its center.
//!
//! ```text
//!                 apex (cx, -h)
//!              .-'''''-.
//!   ________.-'         '-.________   baseline y = 0
//!   0      x0     cx     x1        width
//! ```
//!
//! All inputs are sanitized rather than rejected: non-finite or negative
//! lengths become zero and the center fraction is clamped to `[0, 1]`.

use convex_core::{cubic_point, sanitize_extent, sanitize_fraction, Path, Point, Size};

/// Horizontal control point offset, as a fraction of the half width.
///
/// 0.5 keeps the x control polygon monotonic so the bump never folds back.
const CONTROL_RATIO: f32 = 0.5;

/// Cubic Bézier circle approximation constant
const KAPPA: f32 = 0.5522847498;

/// Build the closed convex bump outline.
///
/// The bump is `curve_width` wide and `curve_height` tall, centered at
/// `center_fraction * total_width`. It rises upward (negative y) when
/// `top_offset <= 0` and hangs downward otherwise. The outline runs along
/// the baseline from `min(0, x0)` to `max(total_width, x1)` and closes back
/// to its start.
pub fn generate(
    center_fraction: f32,
    total_width: f32,
    curve_width: f32,
    curve_height: f32,
    top_offset: f32,
) -> Path {
    CurvePathGenerator::new(curve_width, curve_height, top_offset)
        .generate(center_fraction, total_width)
}

/// Curve generator with fixed bump dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePathGenerator {
    curve_width: f32,
    curve_height: f32,
    top_offset: f32,
}

impl CurvePathGenerator {
    pub fn new(curve_width: f32, curve_height: f32, top_offset: f32) -> Self {
        Self {
            curve_width: sanitize_extent(curve_width),
            curve_height: sanitize_extent(curve_height),
            top_offset: if top_offset.is_finite() {
                top_offset
            } else {
                0.0
            },
        }
    }

    pub fn curve_width(&self) -> f32 {
        self.curve_width
    }

    pub fn curve_height(&self) -> f32 {
        self.curve_height
    }

    pub fn top_offset(&self) -> f32 {
        self.top_offset
    }

    /// Signed vertical displacement of the apex from the baseline
    fn apex_dy(&self) -> f32 {
        if self.top_offset > 0.0 {
            self.curve_height
        } else {
            -self.curve_height
        }
    }

    /// Position of the bump's apex relative to a baseline at y = 0
    pub fn apex(&self, center_fraction: f32, total_width: f32) -> Point {
        let cx = sanitize_fraction(center_fraction) * sanitize_extent(total_width);
        Point::new(cx, self.apex_dy())
    }

    /// Closed outline of the bump over a baseline at y = 0
    pub fn generate(&self, center_fraction: f32, total_width: f32) -> Path {
        let width = sanitize_extent(total_width);
        let cx = sanitize_fraction(center_fraction) * width;
        let hw = self.curve_width / 2.0;
        let (x0, x1) = (cx - hw, cx + hw);
        let left = x0.min(0.0);
        let right = x1.max(width);

        let mut path = Path::new().move_to(left, 0.0);
        if x0 > left {
            path = path.line_to(x0, 0.0);
        }
        path = self.bump(path, cx, 0.0);
        if right > x1 {
            path = path.line_to(right, 0.0);
        }
        path.close()
    }

    /// Fill outline of the whole bar with the bump on its top edge.
    ///
    /// The bar occupies `(0, 0)..(width, height)`. The two top corners are
    /// rounded by `corner_radius`, clamped to fit the bar and shrunk to end
    /// where the bump begins. Near either edge the bump is cut at the bar's
    /// side, so the outline stays within `0..=width` and never folds back.
    pub fn bar_outline(&self, center_fraction: f32, size: Size, corner_radius: f32) -> Path {
        let size = size.sanitized();
        let (w, h) = (size.width, size.height);
        let r = sanitize_extent(corner_radius).min(w / 2.0).min(h);
        let cx = sanitize_fraction(center_fraction) * w;
        let [left, right] = self.halves(cx, 0.0);
        let (x0, x1) = (left.p0.x, right.p3.x);

        let mut path = Path::new().move_to(0.0, h);
        if x0 < 0.0 {
            let clipped = left.clip_start(0.0);
            path = clipped.append_to(path.line_to(0.0, clipped.p0.y));
        } else {
            let corner = r.min(x0);
            path = path.line_to(0.0, corner);
            if corner > 0.0 {
                let c = corner * (1.0 - KAPPA);
                path = path.cubic_to(0.0, c, c, 0.0, corner, 0.0);
            }
            if x0 > corner {
                path = path.line_to(x0, 0.0);
            }
            path = left.append_to(path);
        }

        if x1 > w {
            path = right.clip_end(w).append_to(path);
        } else {
            let corner = r.min(w - x1);
            path = right.append_to(path);
            if w - corner > x1 {
                path = path.line_to(w - corner, 0.0);
            }
            if corner > 0.0 {
                let c = corner * (1.0 - KAPPA);
                path = path.cubic_to(w - c, 0.0, w, c, w, corner);
            }
        }
        path.line_to(w, h).close()
    }

    /// Append the two cubic halves of the bump, starting at `(cx - hw, y)`
    fn bump(&self, path: Path, cx: f32, y: f32) -> Path {
        let [left, right] = self.halves(cx, y);
        right.append_to(left.append_to(path))
    }

    /// Left and right halves of the bump over a baseline at `y`
    fn halves(&self, cx: f32, y: f32) -> [Cubic; 2] {
        let hw = self.curve_width / 2.0;
        let k = hw * CONTROL_RATIO;
        let apex_y = y + self.apex_dy();
        let (x0, x1) = (cx - hw, cx + hw);

        [
            Cubic {
                p0: Point::new(x0, y),
                p1: Point::new(x0 + k, y),
                p2: Point::new(cx - k, apex_y),
                p3: Point::new(cx, apex_y),
            },
            Cubic {
                p0: Point::new(cx, apex_y),
                p1: Point::new(cx + k, apex_y),
                p2: Point::new(x1 - k, y),
                p3: Point::new(x1, y),
            },
        ]
    }
}

/// One cubic segment whose x never decreases along `t`
#[derive(Clone, Copy, Debug)]
struct Cubic {
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
}

impl Cubic {
    fn point(&self, t: f32) -> Point {
        cubic_point(self.p0, self.p1, self.p2, self.p3, t)
    }

    /// De Casteljau split at `t`
    fn split(&self, t: f32) -> (Cubic, Cubic) {
        let mix = |a: Point, b: Point| Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
        let (a, b, c) = (mix(self.p0, self.p1), mix(self.p1, self.p2), mix(self.p2, self.p3));
        let (d, e) = (mix(a, b), mix(b, c));
        let mid = mix(d, e);
        (
            Cubic {
                p0: self.p0,
                p1: a,
                p2: d,
                p3: mid,
            },
            Cubic {
                p0: mid,
                p1: e,
                p2: c,
                p3: self.p3,
            },
        )
    }

    /// Parameter where the curve crosses `x`, by bisection
    fn t_at_x(&self, x: f32) -> f32 {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        for _ in 0..32 {
            let mid = (lo + hi) / 2.0;
            if self.point(mid).x < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }

    /// Part of the curve to the right of `x`
    fn clip_start(&self, x: f32) -> Cubic {
        let mut tail = self.split(self.t_at_x(x)).1;
        tail.p0.x = x;
        tail
    }

    /// Part of the curve to the left of `x`
    fn clip_end(&self, x: f32) -> Cubic {
        let mut head = self.split(self.t_at_x(x)).0;
        head.p3.x = x;
        head
    }

    /// Continue `path` with this segment from its current point
    fn append_to(&self, path: Path) -> Path {
        path.cubic_to(self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y)
    }
}
