//! Assembly of the final path from points, strategy and baseline.

use std::borrow::Cow;

use log::trace;

use crate::{
    config::{Baseline, Config, Layout},
    error::{Error, Result},
    filter::filter_baseline,
    path::Path,
    point::Point,
    registry::{self, Strategy},
    shape::{self, Edges},
};

/// The reference edge an area is filled to.
#[derive(Clone, Debug, PartialEq)]
pub enum BaseEdge<'a> {
    /// Constant value on the dependent axis.
    Scalar(f64),
    /// Per-point base, paired with data points by position.
    Points(Cow<'a, [Point]>),
}

/// The shape a builder produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Area against per-point base positions.
    VectorArea,
    /// Area against a constant baseline.
    ScalarArea,
    /// Open (or curve-closed) line.
    Line,
}

/// Builds paths for one resolved configuration.
///
/// The builder is an immutable value; [`PathBuilder::build`] borrows it and
/// allocates fresh curve state for every call.
#[derive(Clone, Debug)]
pub struct PathBuilder<'a> {
    /// Interpolation strategy.
    strategy: Strategy<'a>,
    /// Chart orientation.
    layout: Layout,
    /// Area baseline, if any.
    baseline: Option<BaseEdge<'a>>,
    /// Coordinate rounding.
    digits: Option<u8>,
}

impl<'a> PathBuilder<'a> {
    /// A line builder for `strategy`.
    pub fn new(strategy: Strategy<'a>, layout: Layout) -> Self {
        Self {
            strategy,
            layout,
            baseline: None,
            digits: None,
        }
    }

    /// Resolve the curve type and baseline of `config`.
    ///
    /// A per-point baseline is filtered the same way `config` filters points.
    pub fn from_config(config: &'a Config) -> Self {
        let baseline = config.baseline.as_ref().map(|b| match b {
            Baseline::Scalar(v) => BaseEdge::Scalar(*v),
            Baseline::Points(points) => BaseEdge::Points(filter_baseline(points, config)),
        });
        Self {
            strategy: registry::resolve(&config.curve, config.layout),
            layout: config.layout,
            baseline,
            digits: config.digits,
        }
    }

    /// Fill an area down to `baseline`.
    pub fn with_baseline(mut self, baseline: BaseEdge<'a>) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Round coordinates to `digits` fractional digits.
    pub fn with_digits(mut self, digits: Option<u8>) -> Self {
        self.digits = digits;
        self
    }

    /// The resolved strategy.
    pub fn strategy(&self) -> Strategy<'a> {
        self.strategy
    }

    /// The shape this builder produces. A NaN scalar baseline is no baseline.
    pub fn mode(&self) -> Mode {
        match &self.baseline {
            Some(BaseEdge::Points(_)) => Mode::VectorArea,
            Some(BaseEdge::Scalar(v)) if !v.is_nan() => Mode::ScalarArea,
            _ => Mode::Line,
        }
    }

    /// Build the path through `points`.
    ///
    /// Returns `Ok(None)` when there is nothing to draw, and
    /// [`Error::BaselineTooShort`] when a per-point baseline cannot cover
    /// every point. Base points beyond the last data point are ignored.
    pub fn build(&self, points: &[Point]) -> Result<Option<String>> {
        let mode = self.mode();
        trace!(
            "building {mode:?} path: {} points, curve {}, {} layout",
            points.len(),
            self.strategy.name(),
            self.layout
        );
        let mut curve = self.strategy.curve();
        let path = Path::with_digits(self.digits);
        let vertical = self.layout == Layout::Vertical;

        let out = match &self.baseline {
            Some(BaseEdge::Points(base)) => {
                if base.len() < points.len() {
                    return Err(Error::BaselineTooShort {
                        points: points.len(),
                        baseline: base.len(),
                    });
                }
                let paired: Vec<(&Point, &Point)> = points.iter().zip(base.iter()).collect();
                shape::area(
                    &paired,
                    |(p, _)| p.is_defined(),
                    |(p, b)| vector_edges(p, b, vertical),
                    curve.as_mut(),
                    path,
                )
            }
            Some(BaseEdge::Scalar(v)) if !v.is_nan() => shape::area(
                points,
                Point::is_defined,
                |p| scalar_edges(p, *v, vertical),
                curve.as_mut(),
                path,
            ),
            _ => shape::line(
                points,
                Point::is_defined,
                |p| (p.x_or_nan(), p.y_or_nan()),
                curve.as_mut(),
                path,
            ),
        };
        Ok(out)
    }
}

/// Edges against a per-point base. The independent coordinate comes from the
/// data point; only the dependent coordinate is read from the base.
fn vector_edges(p: &Point, base: &Point, vertical: bool) -> Edges {
    let (x, y) = (p.x_or_nan(), p.y_or_nan());
    Edges {
        top: (x, y),
        base: if vertical {
            (base.x_or_nan(), y)
        } else {
            (x, base.y_or_nan())
        },
    }
}

/// Edges against a constant baseline.
fn scalar_edges(p: &Point, value: f64, vertical: bool) -> Edges {
    let (x, y) = (p.x_or_nan(), p.y_or_nan());
    Edges {
        top: (x, y),
        base: if vertical { (value, y) } else { (x, value) },
    }
}
