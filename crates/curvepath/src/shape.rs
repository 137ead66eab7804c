//! Line and area generators.
//!
//! Both walk the data once, splitting it into runs of consecutive defined
//! items. Each run is streamed through the curve as one segment; an undefined
//! item ends the segment, leaving a gap in the output.

use crate::{
    curves::Curve,
    path::{Path, PathContext},
};

/// The two edges an area item contributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edges {
    /// Point on the value edge, drawn forwards.
    pub top: (f64, f64),
    /// Point on the base edge, drawn backwards.
    pub base: (f64, f64),
}

/// Generate a line through `data`.
///
/// Returns `None` if nothing was drawn.
pub fn line<T>(
    data: &[T],
    defined: impl Fn(&T) -> bool,
    coords: impl Fn(&T) -> (f64, f64),
    curve: &mut dyn Curve,
    mut path: Path,
) -> Option<String> {
    let mut in_run = false;
    for i in 0..=data.len() {
        let item = data.get(i).filter(|d| defined(d));
        if item.is_some() != in_run {
            in_run = !in_run;
            if in_run {
                curve.line_start(&mut path);
            } else {
                curve.line_end(&mut path);
            }
        }
        if let Some(d) = item {
            let (x, y) = coords(d);
            curve.point(&mut path, x, y);
        }
    }
    finish(path)
}

/// Generate a filled area over `data`.
///
/// Each run of defined items becomes one closed shape: the top edge forwards,
/// then the base edge backwards. Returns `None` if nothing was drawn.
pub fn area<T>(
    data: &[T],
    defined: impl Fn(&T) -> bool,
    edges: impl Fn(&T) -> Edges,
    curve: &mut dyn Curve,
    mut path: Path,
) -> Option<String> {
    let mut base: Vec<(f64, f64)> = Vec::new();
    let mut in_run = false;
    for i in 0..=data.len() {
        let item = data.get(i).filter(|d| defined(d));
        if item.is_some() != in_run {
            in_run = !in_run;
            if in_run {
                curve.area_start(&mut path);
                curve.line_start(&mut path);
            } else {
                close_area(curve, &mut path, &base);
                base.clear();
            }
        }
        if let Some(d) = item {
            let Edges { top, base: b } = edges(d);
            base.push(b);
            curve.point(&mut path, top.0, top.1);
        }
    }
    finish(path)
}

/// End the top edge and trace the base edge back to the start of the run.
fn close_area(curve: &mut dyn Curve, ctx: &mut dyn PathContext, base: &[(f64, f64)]) {
    curve.line_end(ctx);
    curve.line_start(ctx);
    for &(x, y) in base.iter().rev() {
        curve.point(ctx, x, y);
    }
    curve.line_end(ctx);
    curve.area_end(ctx);
}

/// The path data, or `None` when empty.
fn finish(path: Path) -> Option<String> {
    if path.is_empty() {
        None
    } else {
        Some(path.into_string())
    }
}
