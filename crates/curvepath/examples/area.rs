//! Minimal area example: fill under a monotone curve down to a baseline.

use std::error::Error;

use curvepath::{Config, Point, curve_path};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    let points = [
        Point::new(0.0, 80.0),
        Point::new(40.0, 20.0),
        Point::maybe(Some(80.0), None),
        Point::new(120.0, 60.0),
        Point::new(160.0, 40.0),
    ];

    let line = curve_path(&points, &Config::new().with_curve("monotone"), None)?;
    println!("line: {}", line.unwrap_or_default());

    let config = Config::new().with_curve("monotone").with_baseline(100.0);
    let area = curve_path(&points, &config, None)?;
    println!("area: {}", area.unwrap_or_default());

    let bridged = curve_path(&points, &config.connect_nulls(true), None)?;
    println!("bridged: {}", bridged.unwrap_or_default());
    // snips-end: example

    Ok(())
}
