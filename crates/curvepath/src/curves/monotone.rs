//! Monotone cubic interpolation (Steffen's method).
//!
//! Preserves monotonicity of the data along the swept axis: the curve never
//! overshoots a local extremum. Tangents are estimated from the three-point
//! neighbourhood and clamped.

use super::{Curve, Pass};
use crate::path::PathContext;

/// An (x, y) pair.
type Xy = (f64, f64);

/// `-1` for negative values, `1` otherwise (including NaN and zero).
fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Divisor used for a secant slope: `h`, or a signed zero taking the
/// direction of the neighbouring interval when `h` vanishes.
fn interval(h: f64, other: f64) -> f64 {
    if h != 0.0 && !h.is_nan() {
        h
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}

/// Monotone cubic in x.
#[derive(Debug)]
pub struct MonotoneX {
    /// Current edge.
    pass: Pass,
    /// Second-to-last point.
    p0: Xy,
    /// Last point.
    p1: Xy,
    /// Tangent at `p0`.
    t0: f64,
    /// Points seen in the current segment, saturating at 3.
    seen: u8,
}

impl Default for MonotoneX {
    fn default() -> Self {
        Self {
            pass: Pass::Line,
            p0: (f64::NAN, f64::NAN),
            p1: (f64::NAN, f64::NAN),
            t0: f64::NAN,
            seen: 0,
        }
    }
}

impl MonotoneX {
    /// Tangent at `p1` given the next point.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let (x0, y0) = self.p0;
        let (x1, y1) = self.p1;
        let h0 = x1 - x0;
        let h1 = x2 - x1;
        let s0 = (y1 - y0) / interval(h0, h1);
        let s1 = (y2 - y1) / interval(h1, h0);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        if s0.is_nan() || s1.is_nan() || p.is_nan() {
            return 0.0;
        }
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if t.is_nan() { 0.0 } else { t }
    }

    /// One-sided tangent at an end point, given the tangent `t` at the other
    /// end of the interval.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.p1.0 - self.p0.0;
        if h != 0.0 && !h.is_nan() {
            (3.0 * (self.p1.1 - self.p0.1) / h - t) / 2.0
        } else {
            t
        }
    }

    /// Emit the Hermite segment from `p0` to `p1` with end tangents `t0`, `t1`.
    fn hermite(&self, ctx: &mut dyn PathContext, t0: f64, t1: f64) {
        let (x0, y0) = self.p0;
        let (x1, y1) = self.p1;
        let dx = (x1 - x0) / 3.0;
        ctx.bezier_curve_to(x0 + dx, y0 + dx * t0, x1 - dx, y1 - dx * t1, x1, y1);
    }
}

impl Curve for MonotoneX {
    fn area_start(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::AreaTop;
    }

    fn area_end(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::Line;
    }

    fn line_start(&mut self, _ctx: &mut dyn PathContext) {
        self.p0 = (f64::NAN, f64::NAN);
        self.p1 = (f64::NAN, f64::NAN);
        self.t0 = f64::NAN;
        self.seen = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        match self.seen {
            2 => ctx.line_to(self.p1.0, self.p1.1),
            3 => self.hermite(ctx, self.t0, self.slope2(self.t0)),
            _ => {}
        }
        if self.pass.closes(self.seen == 1) {
            ctx.close_path();
        }
        self.pass = self.pass.next();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if (x, y) == self.p1 {
            // Coincident points carry no direction.
            return;
        }
        let mut t1 = f64::NAN;
        match self.seen {
            0 => {
                self.seen = 1;
                self.pass.start_at(ctx, x, y);
            }
            1 => self.seen = 2,
            2 => {
                self.seen = 3;
                t1 = self.slope3(x, y);
                self.hermite(ctx, self.slope2(t1), t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.hermite(ctx, self.t0, t1);
            }
        }
        self.p0 = self.p1;
        self.p1 = (x, y);
        self.t0 = t1;
    }
}

/// Swaps x and y on every command before forwarding.
struct Reflect<'a>(&'a mut dyn PathContext);

impl PathContext for Reflect<'_> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(y, x);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(y, x);
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.0.bezier_curve_to(y1, x1, y2, x2, y, x);
    }

    fn close_path(&mut self) {
        self.0.close_path();
    }
}

/// Monotone cubic in y: [`MonotoneX`] run with the axes swapped.
#[derive(Debug, Default)]
pub struct MonotoneY {
    /// Curve operating in the swapped coordinate system.
    inner: MonotoneX,
}

impl Curve for MonotoneY {
    fn area_start(&mut self, ctx: &mut dyn PathContext) {
        self.inner.area_start(&mut Reflect(ctx));
    }

    fn area_end(&mut self, ctx: &mut dyn PathContext) {
        self.inner.area_end(&mut Reflect(ctx));
    }

    fn line_start(&mut self, ctx: &mut dyn PathContext) {
        self.inner.line_start(&mut Reflect(ctx));
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        self.inner.line_end(&mut Reflect(ctx));
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        self.inner.point(&mut Reflect(ctx), y, x);
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

    #[test]
    fn monotone_x() {
        let mut c = MonotoneX::default();
        assert_eq!(run(&mut c, &[]), "");
        assert_eq!(run(&mut c, &[(2.0, 2.0)]), "M2,2Z");
        assert_eq!(run(&mut c, &[(0.0, 0.0), (3.0, 3.0)]), "M0,0L3,3");
        assert_eq!(
            run(&mut c, &[(0.0, 0.0), (3.0, 3.0), (6.0, 0.0)]),
            "M0,0C1,1.5,2,3,3,3C4,3,5,1.5,6,0"
        );
    }

    #[test]
    fn skips_coincident() {
        let mut c = MonotoneX::default();
        assert_eq!(
            run(&mut c, &[(0.0, 0.0), (0.0, 0.0), (3.0, 3.0)]),
            "M0,0L3,3"
        );
    }

    #[test]
    fn flat_extremum_has_zero_tangent() {
        let mut c = MonotoneX::default();
        c.p0 = (0.0, 0.0);
        c.p1 = (3.0, 3.0);
        assert_eq!(c.slope3(6.0, 0.0), 0.0);
        // Monotone data keeps a positive tangent.
        assert!(c.slope3(6.0, 6.0) > 0.0);
    }

    #[test]
    fn monotone_y_swaps_axes() {
        let mut c = MonotoneY::default();
        assert_eq!(
            run(&mut c, &[(0.0, 0.0), (3.0, 3.0), (0.0, 6.0)]),
            "M0,0C1.5,1,3,2,3,3C3,4,1.5,5,0,6"
        );
    }
}
