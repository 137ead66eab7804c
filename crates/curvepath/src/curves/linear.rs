use super::{Curve, Pass};
use crate::path::PathContext;

/// Straight segments between consecutive points.
#[derive(Debug, Default)]
pub struct Linear {
    /// Current edge.
    pass: Pass,
    /// Points seen in the current segment, saturating at 2.
    seen: u8,
}

impl Curve for Linear {
    fn area_start(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::AreaTop;
    }

    fn area_end(&mut self, _ctx: &mut dyn PathContext) {
        self.pass = Pass::Line;
    }

    fn line_start(&mut self, _ctx: &mut dyn PathContext) {
        self.seen = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        if self.pass.closes(self.seen == 1) {
            ctx.close_path();
        }
        self.pass = self.pass.next();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.seen == 0 {
            self.seen = 1;
            self.pass.start_at(ctx, x, y);
        } else {
            self.seen = 2;
            ctx.line_to(x, y);
        }
    }
}

/// Straight segments, with each segment closed back to its first point.
#[derive(Debug, Default)]
pub struct LinearClosed {
    /// Whether the current segment has a point.
    started: bool,
}

impl Curve for LinearClosed {
    fn line_start(&mut self, _ctx: &mut dyn PathContext) {
        self.started = false;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        if self.started {
            ctx.close_path();
        }
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.started {
            ctx.line_to(x, y);
        } else {
            self.started = true;
            ctx.move_to(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;

    fn run(curve: &mut dyn Curve, points: &[(f64, f64)]) -> String {
        let mut path = Path::new();
        curve.line_start(&mut path);
        for &(x, y) in points {
            curve.point(&mut path, x, y);
        }
        curve.line_end(&mut path);
        path.into_string()
    }

    #[test]
    fn linear() {
        let mut c = Linear::default();
        assert_eq!(run(&mut c, &[]), "");
        assert_eq!(run(&mut c, &[(0.0, 1.0)]), "M0,1Z");
        assert_eq!(run(&mut c, &[(0.0, 1.0), (2.0, 3.0)]), "M0,1L2,3");
    }

    #[test]
    fn linear_area_edges() {
        let mut c = Linear::default();
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
        assert_eq!(path.as_str(), "M0,1L2,3L2,0L0,0Z");
    }

    #[test]
    fn linear_closed() {
        let mut c = LinearClosed::default();
        assert_eq!(run(&mut c, &[]), "");
        assert_eq!(run(&mut c, &[(1.0, 1.0)]), "M1,1Z");
        assert_eq!(
            run(&mut c, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
            "M0,0L1,0L1,1Z"
        );
    }
}
