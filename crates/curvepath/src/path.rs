//! SVG path-data serialization.

use std::fmt;

/// Drawing commands a curve emits.
///
/// Curves never see the output format; they drive a context, and the context
/// decides how commands are recorded.
pub trait PathContext {
    /// Start a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);
    /// Straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Cubic Bézier segment with control points `(x1, y1)`, `(x2, y2)` ending
    /// at `(x, y)`.
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);
    /// Close the current subpath.
    fn close_path(&mut self);
}

/// Accumulates SVG path data (`M`, `L`, `C`, `Z`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    /// Serialized commands so far.
    data: String,
    /// Fractional digits to round to, or `None` for shortest round-trip output.
    digits: Option<u8>,
}

impl Path {
    /// An empty path writing full-precision coordinates.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty path rounding each coordinate to `digits` fractional digits.
    pub fn with_digits(digits: Option<u8>) -> Self {
        Self {
            data: String::new(),
            digits,
        }
    }

    /// True if no command has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The path data written so far.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Consume the path, returning its data.
    pub fn into_string(self) -> String {
        self.data
    }

    /// Append a single command letter followed by comma-separated operands.
    fn command(&mut self, letter: char, operands: &[f64]) {
        self.data.push(letter);
        for (i, v) in operands.iter().enumerate() {
            if i > 0 {
                self.data.push(',');
            }
            write_number(&mut self.data, *v, self.digits);
        }
    }
}

impl PathContext for Path {
    fn move_to(&mut self, x: f64, y: f64) {
        self.command('M', &[x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.command('L', &[x, y]);
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.command('C', &[x1, y1, x2, y2, x, y]);
    }

    fn close_path(&mut self) {
        self.data.push('Z');
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Write one coordinate.
///
/// Non-finite values are spelled the way SVG consumers of script-generated
/// paths expect (`NaN`, `Infinity`), and negative zero is written as `0`.
fn write_number(out: &mut String, v: f64, digits: Option<u8>) {
    if v.is_nan() {
        out.push_str("NaN");
        return;
    }
    if v.is_infinite() {
        out.push_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        return;
    }
    let v = match digits {
        Some(d) => {
            let k = 10f64.powi(i32::from(d));
            // Values too large to scale have no fractional part to round.
            let rounded = (v * k).round() / k;
            if rounded.is_finite() { rounded } else { v }
        }
        None => v,
    };
    let v = if v == 0.0 { 0.0 } else { v };
    out.push_str(&v.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        let mut p = Path::new();
        assert!(p.is_empty());
        p.move_to(0.0, 1.5);
        p.line_to(10.0, -2.0);
        p.bezier_curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        p.close_path();
        assert_eq!(p.as_str(), "M0,1.5L10,-2C1,2,3,4,5,6Z");
        assert_eq!(p.to_string(), p.as_str());
    }

    #[test]
    fn numbers() {
        let mut p = Path::new();
        p.move_to(-0.0, 1.0 / 3.0);
        assert_eq!(p.as_str(), "M0,0.3333333333333333");

        let mut p = Path::new();
        p.line_to(f64::NAN, f64::NEG_INFINITY);
        assert_eq!(p.as_str(), "LNaN,-Infinity");
    }

    #[test]
    fn digits() {
        let mut p = Path::with_digits(Some(2));
        p.move_to(1.0 / 3.0, 2.0);
        p.line_to(-0.001, 1.005_000_1);
        assert_eq!(p.into_string(), "M0.33,2L0,1.01");

        let mut p = Path::with_digits(Some(0));
        p.move_to(2.6, 7.4);
        assert_eq!(p.as_str(), "M3,7");
    }

    #[test]
    fn digits_on_huge_values() {
        let mut p = Path::with_digits(Some(2));
        p.move_to(1e307, 1.0);
        p.line_to(-1e307, f64::INFINITY);
        let d = p.into_string();
        assert!(!d.contains("inf"), "{d}");
        assert!(d.ends_with(",Infinity"), "{d}");
        assert_eq!(d.matches("1000000000000000").count(), 2, "{d}");
    }
}
