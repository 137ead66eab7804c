//! Selection of the points that take part in interpolation.

use std::borrow::Cow;

use crate::{config::Config, point::Point};

/// The working point sequence for `config`.
///
/// With neither flag set the input is passed through, gaps included; the
/// generators break the path at undefined points. `connect_nulls` drops
/// undefined points so the path bridges gaps. `connect_nan` (consulted only
/// when `connect_nulls` is off) drops points whose value is NaN.
pub fn filter_points<'a>(points: &'a [Point], config: &Config) -> Cow<'a, [Point]> {
    if config.connect_nulls {
        retain(points, Point::is_defined)
    } else if config.connect_nan {
        retain(points, Point::is_nan_valid)
    } else {
        Cow::Borrowed(points)
    }
}

/// The working baseline sequence for `config`.
///
/// With `connect_nulls`, undefined baseline points are dropped on their own
/// terms, independent of which data points were dropped.
pub fn filter_baseline<'a>(baseline: &'a [Point], config: &Config) -> Cow<'a, [Point]> {
    if config.connect_nulls {
        retain(baseline, Point::is_defined)
    } else {
        Cow::Borrowed(baseline)
    }
}

/// Keep points matching `keep`, borrowing when nothing is removed.
fn retain(points: &[Point], keep: impl Fn(&Point) -> bool) -> Cow<'_, [Point]> {
    if points.iter().all(&keep) {
        Cow::Borrowed(points)
    } else {
        Cow::Owned(points.iter().copied().filter(|p| keep(p)).collect())
    }
}
