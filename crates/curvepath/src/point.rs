//! Input point type and the validity predicates applied to it.

use serde::{Deserialize, Deserializer};

/// The data value behind a point.
///
/// An explicit `null` is kept apart from an absent value: only the latter, or
/// a NaN number, counts as NaN when filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    /// No value was given.
    #[default]
    Absent,
    /// The value was given as `null`.
    Null,
    /// A numeric value, possibly NaN.
    Number(f64),
}

impl Value {
    /// True for an absent value or a NaN number.
    pub fn is_nan(self) -> bool {
        match self {
            Self::Absent => true,
            Self::Null => false,
            Self::Number(v) => v.is_nan(),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

/// Read a present `value` field; absence is handled by `#[serde(default)]`.
fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(Value::Null, Value::Number))
}

/// A data point in drawing-surface coordinates.
///
/// Missing coordinates are how callers express gaps: a point whose `x` or `y`
/// is absent (or not finite) breaks the rendered path at that position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical coordinate.
    #[serde(default)]
    pub y: Option<f64>,
    /// Underlying data value, consulted only when filtering NaN values.
    #[serde(default, deserialize_with = "present_value")]
    pub value: Value,
}

/// Baseline points share the data point layout.
pub type BaselinePoint = Point;

impl Point {
    /// A point with both coordinates present and no data value.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            value: Value::Absent,
        }
    }

    /// A point with optional coordinates, used to express gaps.
    pub const fn maybe(x: Option<f64>, y: Option<f64>) -> Self {
        Self {
            x,
            y,
            value: Value::Absent,
        }
    }

    /// Attach a data value.
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Value::Number(value);
        self
    }

    /// Mark the data value as explicitly null.
    pub const fn with_null_value(mut self) -> Self {
        self.value = Value::Null;
        self
    }

    /// True when both coordinates are present and finite.
    pub fn is_defined(&self) -> bool {
        matches!((self.x, self.y), (Some(x), Some(y)) if x.is_finite() && y.is_finite())
    }

    /// True when the data value is not NaN.
    ///
    /// An absent value is treated as NaN; an explicit null is not.
    pub fn is_nan_valid(&self) -> bool {
        !self.value.is_nan()
    }

    /// The x coordinate, NaN when absent.
    pub fn x_or_nan(&self) -> f64 {
        self.x.unwrap_or(f64::NAN)
    }

    /// The y coordinate, NaN when absent.
    pub fn y_or_nan(&self) -> f64 {
        self.y.unwrap_or(f64::NAN)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
