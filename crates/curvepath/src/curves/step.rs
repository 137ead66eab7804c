use super::{Curve, Pass};
use crate::path::PathContext;

/// Piecewise-constant interpolation.
///
/// `t` places the vertical riser between two points: `0` steps immediately
/// (step-before), `1` steps at the next point (step-after) and `0.5` steps
/// halfway.
#[derive(Debug)]
pub struct Step {
    /// Riser position for the current edge.
    t: f64,
    /// Current edge.
    pass: Pass,
    /// Previous point.
    prev: (f64, f64),
    /// Points seen in the current segment, saturating at 2.
    seen: u8,
}

impl Step {
    /// A step curve with the riser at `t`.
    pub fn new(t: f64) -> Self {
        Self {
            t,
            pass: Pass::Line,
            prev: (f64::NAN, f64::NAN),
            seen: 0,
        }
    }

    /// Riser halfway between points.
    pub fn middle() -> Self {
        Self::new(0.5)
    }

    /// Riser at the earlier point.
    pub fn before() -> Self {
        Self::new(0.0)
    }

    /// Riser at the later point.
    pub fn after() -> Self {
        Self::new(1.0)
    }
}

impl Curve for Step {
    fn area_start(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::AreaTop;
    }

    fn area_end(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::Line;
    }

    fn line_start(&mut self, _ctx: &mut dyn PathContext) {
        self.prev = (f64::NAN, f64::NAN);
        self.seen = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        if 0.0 < self.t && self.t < 1.0 && self.seen == 2 {
            ctx.line_to(self.prev.0, self.prev.1);
        }
        if self.pass.closes(self.seen == 1) {
            ctx.close_path();
        }
        // The base edge runs backwards, so its riser mirrors the top edge.
        if self.pass.in_area() {
            self.t = 1.0 - self.t;
        }
        self.pass = self.pass.next();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.seen == 0 {
            self.seen = 1;
            self.pass.start_at(ctx, x, y);
        } else {
            self.seen = 2;
            let (px, py) = self.prev;
            if self.t <= 0.0 {
                ctx.line_to(px, y);
                ctx.line_to(x, y);
            } else {
                let riser = px * (1.0 - self.t) + x * self.t;
                ctx.line_to(riser, py);
                ctx.line_to(riser, y);
            }
        }
        self.prev = (x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;

    fn run(mut curve: Step, points: &[(f64, f64)]) -> String {
        let mut path = Path::new();
        curve.line_start(&mut path);
        for &(x, y) in points {
            curve.point(&mut path, x, y);
        }
        curve.line_end(&mut path);
        path.into_string()
    }

    const PTS: [(f64, f64); 3] = [(0.0, 0.0), (2.0, 4.0), (4.0, 2.0)];

    #[test]
    fn middle() {
        assert_eq!(
            run(Step::middle(), &PTS),
            "M0,0L1,0L1,4L3,4L3,2L4,2"
        );
    }

    #[test]
    fn before() {
        assert_eq!(run(Step::before(), &PTS), "M0,0L0,4L2,4L2,2L4,2");
    }

    #[test]
    fn after() {
        assert_eq!(run(Step::after(), &PTS), "M0,0L2,0L2,4L4,4L4,2");
    }

    #[test]
    fn lone_point_closes() {
        assert_eq!(run(Step::middle(), &[(1.0, 1.0)]), "M1,1Z");
        assert_eq!(run(Step::middle(), &[]), "");
    }

    #[test]
    fn area_mirrors_riser() {
        let mut c = Step::after();
        let mut path = Path::new();
        c.area_start(&mut path);
        c.line_start(&mut path);
        c.point(&mut path, 0.0, 1.0);
        c.point(&mut path, 2.0, 3.0);
        c.line_end(&mut path);
        c.line_start(&mut path);
        c.point(&mut path, 2.0, 0.0);
        c.point(&mut path, 0.0, 0.0);
        c.line_end(&mut path);
        c.area_end(&mut path);
        assert_eq!(path.as_str(), "M0,1L2,1L2,3L2,0L2,0L0,0Z");
        assert_eq!(c.t, 1.0);
    }
}
