//! Command handlers for the `cpath` CLI.
//!
//! These functions read point data, build a configuration and produce path
//! data; printing is left to the caller.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result, bail};
use curvepath::{Baseline, Config, Layout, Point, curve_path, registry};
use log::{info, warn};

/// Where an area's baseline comes from.
#[derive(Clone, Debug)]
pub enum BaselineSource<'a> {
    /// No baseline: draw a line.
    None,
    /// A constant value.
    Value(f64),
    /// A JSON file holding one base point per data point.
    File(&'a Path),
}

/// Parameters for the `render` subcommand.
#[derive(Clone, Debug)]
pub struct RenderOptions<'a> {
    /// Input JSON file; stdin when `None`.
    pub input: Option<&'a Path>,
    /// Curve type name.
    pub curve: &'a str,
    /// Reject names outside the registry instead of drawing them as linear.
    pub strict: bool,
    /// Chart orientation.
    pub layout: Layout,
    /// Baseline for area paths.
    pub baseline: BaselineSource<'a>,
    /// Bridge undefined points.
    pub connect_nulls: bool,
    /// Skip NaN values.
    pub connect_nan: bool,
    /// Coordinate rounding.
    pub digits: Option<u8>,
    /// Path data used when there are no points.
    pub fallback: Option<&'a str>,
}

/// Parse a JSON array of points.
pub fn parse_points(json: &str) -> Result<Vec<Point>> {
    let points: Vec<Point> = serde_json::from_str(json).context("expected a JSON array of points")?;
    Ok(points)
}

/// Read points from a file, or from stdin when `path` is `None`.
pub fn read_points(path: Option<&Path>) -> Result<Vec<Point>> {
    let json = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("could not read points from stdin")?;
            buf
        }
    };
    let points = parse_points(&json).with_context(|| match path {
        Some(path) => format!("invalid point data in {}", path.display()),
        None => "invalid point data on stdin".to_string(),
    })?;
    info!("read {} points", points.len());
    Ok(points)
}

/// Check a curve name against the registry.
///
/// Unknown names are an error when `strict`, and otherwise draw as the
/// default curve with a warning.
pub fn check_curve_name(name: &str, strict: bool) -> Result<()> {
    if registry::lookup(name).is_some() {
        return Ok(());
    }
    if strict {
        bail!(
            "Invalid curve name '{}'. Valid options: {}",
            name,
            registry::CURVE_NAMES.join(", ")
        );
    }
    warn!(
        "unknown curve type '{name}', drawing as {}",
        registry::DEFAULT_CURVE
    );
    Ok(())
}

/// Build a configuration from CLI options, loading a baseline file if given.
pub fn config(opts: &RenderOptions<'_>) -> Result<Config> {
    check_curve_name(opts.curve, opts.strict)?;

    let mut config = Config::new()
        .with_curve(opts.curve)
        .with_layout(opts.layout)
        .connect_nulls(opts.connect_nulls)
        .connect_nan(opts.connect_nan);
    config.digits = opts.digits;

    config.baseline = match opts.baseline {
        BaselineSource::None => None,
        BaselineSource::Value(v) => Some(Baseline::Scalar(v)),
        BaselineSource::File(path) => Some(Baseline::Points(read_points(Some(path))?)),
    };
    Ok(config)
}

/// Produce path data for the `render` subcommand.
///
/// Returns `None` when there is nothing to draw.
pub fn render(opts: &RenderOptions<'_>) -> Result<Option<String>> {
    let config = config(opts)?;
    let points = read_points(opts.input)?;
    let path = curve_path(&points, &config, opts.fallback)?;
    if path.is_none() {
        info!("nothing to draw");
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(curve: &str) -> RenderOptions<'_> {
        RenderOptions {
            input: None,
            curve,
            strict: false,
            layout: Layout::Horizontal,
            baseline: BaselineSource::None,
            connect_nulls: false,
            connect_nan: false,
            digits: None,
            fallback: None,
        }
    }

    #[test]
    fn parses_points_with_gaps() {
        let points = parse_points(r#"[{"x": 0, "y": 5}, {"x": 5, "y": null}]"#).unwrap();
        assert_eq!(points.len(), 2);
        assert!(points[0].is_defined());
        assert!(!points[1].is_defined());
        assert!(parse_points("{}").is_err());
    }

    #[test]
    fn curve_name_checks() {
        assert!(check_curve_name("monotone", true).is_ok());
        assert!(check_curve_name("wiggly", false).is_ok());
        assert!(check_curve_name("wiggly", true).is_err());
    }

    #[test]
    fn builds_config() {
        let mut o = opts("step");
        o.baseline = BaselineSource::Value(3.0);
        o.digits = Some(1);
        let cfg = config(&o).unwrap();
        assert_eq!(cfg.baseline, Some(Baseline::Scalar(3.0)));
        assert_eq!(cfg.digits, Some(1));
        assert!(config(&RenderOptions { strict: true, ..opts("nope") }).is_err());
    }
}
