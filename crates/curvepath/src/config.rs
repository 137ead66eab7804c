//! Per-call configuration.

use std::{fmt, str::FromStr, sync::Arc};

use serde::Deserialize;

use crate::{curves::CurveFactory, point::Point, registry::CurveKind};

/// Chart orientation.
///
/// Decides which axis the interpolation sweeps and which axis is compared
/// against the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Sweep `x`; values on `y`.
    #[default]
    Horizontal,
    /// Sweep `y`; values on `x`.
    Vertical,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(format!(
                "invalid layout '{s}': expected 'horizontal' or 'vertical'"
            )),
        }
    }
}

/// Reference edge of an area fill.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Baseline {
    /// A constant value on the dependent axis.
    Scalar(f64),
    /// One base point per data point, paired by position.
    Points(Vec<Point>),
}

impl From<f64> for Baseline {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<Point>> for Baseline {
    fn from(points: Vec<Point>) -> Self {
        Self::Points(points)
    }
}

/// Requested interpolation strategy.
#[derive(Clone, Debug)]
pub enum CurveType {
    /// A registry name. Unknown names draw as `linear`.
    Named(String),
    /// A caller-supplied strategy.
    Custom(Arc<dyn CurveFactory>),
}

impl CurveType {
    /// Wrap a custom strategy.
    pub fn custom(factory: impl CurveFactory + 'static) -> Self {
        Self::Custom(Arc::new(factory))
    }
}

impl Default for CurveType {
    fn default() -> Self {
        Self::Named(CurveKind::Linear.key().to_string())
    }
}

impl From<&str> for CurveType {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for CurveType {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<CurveKind> for CurveType {
    fn from(kind: CurveKind) -> Self {
        Self::Named(kind.key().to_string())
    }
}

/// Everything that shapes a path besides the points themselves.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Interpolation strategy.
    pub curve: CurveType,
    /// Chart orientation.
    pub layout: Layout,
    /// Area baseline; `None` draws a line.
    pub baseline: Option<Baseline>,
    /// Drop undefined points so the path bridges gaps.
    pub connect_nulls: bool,
    /// Drop points whose value is NaN. Ignored when `connect_nulls` is set.
    pub connect_nan: bool,
    /// Round coordinates to this many fractional digits.
    pub digits: Option<u8>,
}

impl Config {
    /// Default configuration: linear, horizontal, no baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the curve type.
    pub fn with_curve(mut self, curve: impl Into<CurveType>) -> Self {
        self.curve = curve.into();
        self
    }

    /// Set the layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the baseline.
    pub fn with_baseline(mut self, baseline: impl Into<Baseline>) -> Self {
        self.baseline = Some(baseline.into());
        self
    }

    /// Bridge gaps left by undefined points.
    pub fn connect_nulls(mut self, connect: bool) -> Self {
        self.connect_nulls = connect;
        self
    }

    /// Skip points whose value is NaN.
    pub fn connect_nan(mut self, connect: bool) -> Self {
        self.connect_nan = connect;
        self
    }

    /// Round coordinates to `digits` fractional digits.
    pub fn with_digits(mut self, digits: u8) -> Self {
        self.digits = Some(digits);
        self
    }
}
