//! SVG path generation for chart lines and areas.
//!
//! Points arrive already mapped to drawing-surface coordinates. A call picks
//! the candidate points, resolves the requested interpolation strategy, and
//! renders either a line or an area filled down to a baseline.
//!
//! # Supported Curves
//!
//! - Linear, Linear (closed)
//! - Basis, Basis (closed), Basis (open)
//! - Natural
//! - Monotone X / Monotone Y (and layout-dependent `monotone`)
//! - Step, Step before, Step after
//!
//! Custom strategies implement [`curves::CurveFactory`].
//!
//! ```
//! use curvepath::{Config, Point, curve_path};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
//! let d = curve_path(&points, &Config::new(), None).unwrap();
//! assert_eq!(d.as_deref(), Some("M0,0L10,10"));
//! ```

/// Path assembly: mode selection and baseline pairing.
pub mod builder;
/// Per-call configuration.
pub mod config;
/// Interpolation curve implementations.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Candidate point selection.
pub mod filter;
/// Path-data serialization.
pub mod path;
/// Input point type.
pub mod point;
/// Named curve types and strategy resolution.
pub mod registry;
/// Line and area generators.
pub mod shape;

pub use crate::{
    builder::PathBuilder,
    config::{Baseline, Config, CurveType, Layout},
    point::{Point, Value},
};

/// Generate path data for `points` under `config`.
///
/// With no points, a non-empty `fallback` is returned verbatim, and otherwise
/// there is nothing to draw (`Ok(None)`).
pub fn curve_path(
    points: &[Point],
    config: &Config,
    fallback: Option<&str>,
) -> error::Result<Option<String>> {
    if points.is_empty() {
        return Ok(fallback.filter(|f| !f.is_empty()).map(str::to_string));
    }
    let working = filter::filter_points(points, config);
    PathBuilder::from_config(config).build(&working)
}
