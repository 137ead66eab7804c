use smallvec::SmallVec;

use super::{Curve, Pass};
use crate::path::PathContext;

/// Coordinate buffer for one segment.
type Coords = SmallVec<[f64; 16]>;

/// Natural cubic spline through every point of a segment.
///
/// The whole segment is buffered and solved when it ends.
#[derive(Debug, Default)]
pub struct Natural {
    /// Current edge.
    pass: Pass,
    /// Buffered x coordinates.
    xs: Coords,
    /// Buffered y coordinates.
    ys: Coords,
}

/// Solve for the Bézier control points of a natural spline along one axis.
///
/// Returns the first and second control coordinate of each of the
/// `coords.len() - 1` segments. Requires at least three coordinates.
fn control_points(coords: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = coords.len() - 1;
    let mut lower = vec![1.0; n];
    let mut diag = vec![4.0; n];
    let mut rhs = vec![0.0; n];

    lower[0] = 0.0;
    diag[0] = 2.0;
    rhs[0] = coords[0] + 2.0 * coords[1];
    for i in 1..n - 1 {
        rhs[i] = 4.0 * coords[i] + 2.0 * coords[i + 1];
    }
    lower[n - 1] = 2.0;
    diag[n - 1] = 7.0;
    rhs[n - 1] = 8.0 * coords[n - 1] + coords[n];

    // Forward elimination of the tridiagonal system.
    for i in 1..n {
        let factor = lower[i] / diag[i - 1];
        diag[i] -= factor;
        rhs[i] -= factor * rhs[i - 1];
    }

    let mut first = lower;
    first[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        first[i] = (rhs[i] - first[i + 1]) / diag[i];
    }

    let mut second = diag;
    second[n - 1] = (coords[n] + first[n - 1]) / 2.0;
    for i in 0..n - 1 {
        second[i] = 2.0 * coords[i + 1] - first[i + 1];
    }
    (first, second)
}

impl Curve for Natural {
    fn area_start(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::AreaTop;
    }

    fn area_end(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::Line;
    }

    fn line_start(&mut self, _ctx: &mut dyn PathContext) {
        self.xs.clear();
        self.ys.clear();
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        let (xs, ys) = (&self.xs, &self.ys);
        let count = xs.len();
        if count > 0 {
            self.pass.start_at(ctx, xs[0], ys[0]);
            if count == 2 {
                ctx.line_to(xs[1], ys[1]);
            } else if count > 2 {
                let (cx1, cx2) = control_points(xs);
                let (cy1, cy2) = control_points(ys);
                for i in 0..count - 1 {
                    ctx.bezier_curve_to(cx1[i], cy1[i], cx2[i], cy2[i], xs[i + 1], ys[i + 1]);
                }
            }
        }
        if self.pass.closes(count == 1) {
            ctx.close_path();
        }
        self.pass = self.pass.next();
        self.xs.clear();
        self.ys.clear();
    }

    fn point(&mut self, _ctx: &mut dyn PathContext, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
}
