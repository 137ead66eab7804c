use super::{Curve, Pass};
use crate::path::PathContext;

/// An (x, y) pair.
type Xy = (f64, f64);

/// Unset coordinate pair.
const UNSET: Xy = (f64::NAN, f64::NAN);

/// Emit the Bézier segment of a uniform cubic B-spline spanning control
/// points `a`, `b` and `c`.
fn spline_to(ctx: &mut dyn PathContext, a: Xy, b: Xy, c: Xy) {
    ctx.bezier_curve_to(
        (2.0 * a.0 + b.0) / 3.0,
        (2.0 * a.1 + b.1) / 3.0,
        (a.0 + 2.0 * b.0) / 3.0,
        (a.1 + 2.0 * b.1) / 3.0,
        (a.0 + 4.0 * b.0 + c.0) / 6.0,
        (a.1 + 4.0 * b.1 + c.1) / 6.0,
    );
}

/// The spline knot between `a`, `b` and `c`.
fn knot(a: Xy, b: Xy, c: Xy) -> Xy {
    ((a.0 + 4.0 * b.0 + c.0) / 6.0, (a.1 + 4.0 * b.1 + c.1) / 6.0)
}

/// Cubic B-spline clamped to the first and last points.
#[derive(Debug)]
pub struct Basis {
    /// Current edge.
    pass: Pass,
    /// Second-to-last point.
    p0: Xy,
    /// Last point.
    p1: Xy,
    /// Points seen in the current segment, saturating at 3.
    seen: u8,
}

impl Default for Basis {
    fn default() -> Self {
        Self {
            pass: Pass::Line,
            p0: UNSET,
            p1: UNSET,
            seen: 0,
        }
    }
}

impl Basis {
    /// Slide the control window forward.
    fn shift(&mut self, p: Xy) {
        self.p0 = self.p1;
        self.p1 = p;
    }
}

impl Curve for Basis {
    fn area_start(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::AreaTop;
    }

    fn area_end(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::Line;
    }

    fn line_start(&mut self, _ctx: &mut dyn PathContext) {
        self.p0 = UNSET;
        self.p1 = UNSET;
        self.seen = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        match self.seen {
            3 => {
                spline_to(ctx, self.p0, self.p1, self.p1);
                ctx.line_to(self.p1.0, self.p1.1);
            }
            2 => ctx.line_to(self.p1.0, self.p1.1),
            _ => {}
        }
        if self.pass.closes(self.seen == 1) {
            ctx.close_path();
        }
        self.pass = self.pass.next();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        match self.seen {
            0 => {
                self.seen = 1;
                self.pass.start_at(ctx, x, y);
            }
            1 => self.seen = 2,
            2 => {
                self.seen = 3;
                ctx.line_to(
                    (5.0 * self.p0.0 + self.p1.0) / 6.0,
                    (5.0 * self.p0.1 + self.p1.1) / 6.0,
                );
                spline_to(ctx, self.p0, self.p1, (x, y));
            }
            _ => spline_to(ctx, self.p0, self.p1, (x, y)),
        }
        self.shift((x, y));
    }
}

/// Closed cubic B-spline; the first three points are replayed at the end to
/// wrap the spline around.
#[derive(Debug)]
pub struct BasisClosed {
    /// Second-to-last point.
    p0: Xy,
    /// Last point.
    p1: Xy,
    /// First three points of the segment.
    head: [Xy; 3],
    /// Points seen in the current segment, saturating at 3.
    seen: u8,
}

impl Default for BasisClosed {
    fn default() -> Self {
        Self {
            p0: UNSET,
            p1: UNSET,
            head: [UNSET; 3],
            seen: 0,
        }
    }
}

impl Curve for BasisClosed {
    fn line_start(&mut self, _ctx: &mut dyn PathContext) {
        self.p0 = UNSET;
        self.p1 = UNSET;
        self.head = [UNSET; 3];
        self.seen = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        let [a, b, c] = self.head;
        match self.seen {
            1 => {
                ctx.move_to(a.0, a.1);
                ctx.close_path();
            }
            2 => {
                ctx.move_to((a.0 + 2.0 * b.0) / 3.0, (a.1 + 2.0 * b.1) / 3.0);
                ctx.line_to((b.0 + 2.0 * a.0) / 3.0, (b.1 + 2.0 * a.1) / 3.0);
                ctx.close_path();
            }
            3 => {
                self.point(ctx, a.0, a.1);
                self.point(ctx, b.0, b.1);
                self.point(ctx, c.0, c.1);
            }
            _ => {}
        }
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        match self.seen {
            0 | 1 => {
                self.head[usize::from(self.seen)] = (x, y);
                self.seen += 1;
            }
            2 => {
                self.head[2] = (x, y);
                self.seen = 3;
                let (kx, ky) = knot(self.p0, self.p1, (x, y));
                ctx.move_to(kx, ky);
            }
            _ => spline_to(ctx, self.p0, self.p1, (x, y)),
        }
        self.p0 = self.p1;
        self.p1 = (x, y);
    }
}

/// Open cubic B-spline: the path starts and ends at knots, not at the first
/// and last points.
#[derive(Debug)]
pub struct BasisOpen {
    /// Current edge.
    pass: Pass,
    /// Second-to-last point.
    p0: Xy,
    /// Last point.
    p1: Xy,
    /// Points seen in the current segment, saturating at 4.
    seen: u8,
}

impl Default for BasisOpen {
    fn default() -> Self {
        Self {
            pass: Pass::Line,
            p0: UNSET,
            p1: UNSET,
            seen: 0,
        }
    }
}

impl Curve for BasisOpen {
    fn area_start(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::AreaTop;
    }

    fn area_end(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::Line;
    }

    fn line_start(&mut self, _ctx: &mut dyn PathContext) {
        self.p0 = UNSET;
        self.p1 = UNSET;
        self.seen = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        if self.pass.closes(self.seen == 3) {
            ctx.close_path();
        }
        self.pass = self.pass.next();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        match self.seen {
            0 | 1 => self.seen += 1,
            2 => {
                self.seen = 3;
                let (kx, ky) = knot(self.p0, self.p1, (x, y));
                self.pass.start_at(ctx, kx, ky);
            }
            _ => {
                self.seen = 4;
                spline_to(ctx, self.p0, self.p1, (x, y));
            }
        }
        self.p0 = self.p1;
        self.p1 = (x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;

    fn run(curve: &mut dyn Curve, points: &[Xy]) -> String {
        let mut path = Path::new();
        curve.line_start(&mut path);
        for &(x, y) in points {
            curve.point(&mut path, x, y);
        }
        curve.line_end(&mut path);
        path.into_string()
    }

    const ZIGZAG: [Xy; 3] = [(0.0, 0.0), (3.0, 3.0), (6.0, 0.0)];

    #[test]
    fn basis() {
        let mut c = Basis::default();
        assert_eq!(run(&mut c, &[]), "");
        assert_eq!(run(&mut c, &[(1.0, 2.0)]), "M1,2Z");
        assert_eq!(run(&mut c, &ZIGZAG[..2]), "M0,0L3,3");
        assert_eq!(
            run(&mut c, &ZIGZAG),
            "M0,0L0.5,0.5C1,1,2,2,3,2C4,2,5,1,5.5,0.5L6,0"
        );
    }

    #[test]
    fn basis_closed() {
        let mut c = BasisClosed::default();
        assert_eq!(run(&mut c, &[]), "");
        assert_eq!(run(&mut c, &[(1.0, 2.0)]), "M1,2Z");
        assert_eq!(run(&mut c, &ZIGZAG[..2]), "M2,2L1,1Z");
        assert_eq!(
            run(&mut c, &ZIGZAG),
            "M3,2C4,2,5,1,4.5,0.5C4,0,2,0,1.5,0.5C1,1,2,2,3,2"
        );
    }

    #[test]
    fn basis_open() {
        let mut c = BasisOpen::default();
        assert_eq!(run(&mut c, &ZIGZAG[..2]), "");
        assert_eq!(run(&mut c, &ZIGZAG), "M3,2Z");
        let mut pts = ZIGZAG.to_vec();
        pts.push((9.0, 3.0));
        assert_eq!(run(&mut c, &pts), "M3,2C4,2,5,1,6,1");
    }
}
