//! Interpolation curves.
//!
//! A curve is a small state machine fed one point at a time by the line and
//! area generators. Segments are bracketed by [`Curve::line_start`] and
//! [`Curve::line_end`]; an area additionally brackets its two edges (top edge
//! forward, base edge backward) with [`Curve::area_start`] and
//! [`Curve::area_end`].

use std::fmt::Debug;

use crate::path::PathContext;

/// B-spline curves (clamped, closed, open).
pub mod basis;
/// Polylines, open and closed.
pub mod linear;
/// Monotone cubic interpolation in x or y.
pub mod monotone;
/// Natural cubic splines.
pub mod natural;
/// Step functions.
pub mod step;

/// The streaming interface every interpolation strategy implements.
pub trait Curve {
    /// Begin an area. Curves that do not distinguish areas ignore this.
    fn area_start(&mut self, _ctx: &mut dyn PathContext) {}
    /// Finish an area.
    fn area_end(&mut self, _ctx: &mut dyn PathContext) {}
    /// Begin a segment of consecutive defined points.
    fn line_start(&mut self, ctx: &mut dyn PathContext);
    /// Finish the current segment, flushing buffered geometry.
    fn line_end(&mut self, ctx: &mut dyn PathContext);
    /// Feed the next point of the current segment.
    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64);
}

/// Creates fresh curve state for each generator call.
///
/// Implement this to supply a custom interpolation strategy. A factory holds
/// no per-call state, so a single value can be shared across threads and
/// calls.
pub trait CurveFactory: Debug + Send + Sync {
    /// A short name for diagnostics.
    fn name(&self) -> &str;
    /// Fresh curve state.
    fn curve(&self) -> Box<dyn Curve>;
}

/// Which edge a curve is drawing, and so how segment ends behave.
///
/// Outside an area a lone point closes on itself; the top edge of an area is
/// left open; the base edge continues from the top edge and closes the area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pass {
    /// Plain line, not inside an area.
    #[default]
    Line,
    /// First edge of an area.
    AreaTop,
    /// Second (reversed) edge of an area.
    AreaBase,
}

impl Pass {
    /// True when the first point of a segment continues the previous edge
    /// with a line instead of starting a subpath.
    pub fn continues(self) -> bool {
        self == Self::AreaBase
    }

    /// Whether the segment should be closed. `lone` reports whether the
    /// segment degenerated to a single drawable point.
    pub fn closes(self, lone: bool) -> bool {
        match self {
            Self::Line => lone,
            Self::AreaTop => false,
            Self::AreaBase => true,
        }
    }

    /// The pass following a segment end.
    pub fn next(self) -> Self {
        match self {
            Self::Line => Self::Line,
            Self::AreaTop => Self::AreaBase,
            Self::AreaBase => Self::AreaTop,
        }
    }

    /// True while inside an area.
    pub fn in_area(self) -> bool {
        self != Self::Line
    }

    /// Move to or continue with a line, depending on the pass.
    pub fn start_at(self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.continues() {
            ctx.line_to(x, y);
        } else {
            ctx.move_to(x, y);
        }
    }
}
