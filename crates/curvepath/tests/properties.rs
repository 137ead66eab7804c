//! Property tests for filtering, resolution and generation.
#[cfg(test)]
mod tests {
    use std::iter;

    use curvepath::{
        Config, CurveType, Layout, Point, Value as DataValue, curve_path,
        filter::filter_points,
        registry::{CurveKind, DEFAULT_CURVE, REGISTRY, Strategy as Resolved, resolve},
    };
    use proptest::prelude::*;

    /// A coordinate that is sometimes missing or not finite.
    fn coord() -> impl Strategy<Value = Option<f64>> {
        prop_oneof![
            6 => (-1000.0..1000.0f64).prop_map(Some),
            1 => Just(None),
            1 => Just(Some(f64::NAN)),
            1 => Just(Some(f64::INFINITY)),
        ]
    }

    fn value() -> impl Strategy<Value = DataValue> {
        prop_oneof![
            4 => (-10.0..10.0f64).prop_map(DataValue::Number),
            1 => Just(DataValue::Absent),
            1 => Just(DataValue::Null),
            1 => Just(DataValue::Number(f64::NAN)),
        ]
    }

    fn point() -> impl Strategy<Value = Point> {
        (coord(), coord(), value()).prop_map(|(x, y, value)| Point { x, y, value })
    }

    fn kind() -> impl Strategy<Value = CurveKind> {
        proptest::sample::select(CurveKind::ALL.to_vec())
    }

    /// Bit-level equality, so NaN-carrying points compare as the same point.
    fn same(a: &Point, b: &Point) -> bool {
        let bits = |v: Option<f64>| v.map(f64::to_bits);
        let value_bits = |v: DataValue| match v {
            DataValue::Absent => (0, 0),
            DataValue::Null => (1, 0),
            DataValue::Number(n) => (2, n.to_bits()),
        };
        bits(a.x) == bits(b.x) && bits(a.y) == bits(b.y) && value_bits(a.value) == value_bits(b.value)
    }

    fn same_seq(a: &[Point], b: &[Point]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(p, q)| same(p, q))
    }

    proptest! {
        #[test]
        fn connect_nulls_keeps_exactly_defined(points in prop::collection::vec(point(), 0..40)) {
            let out = filter_points(&points, &Config::new().connect_nulls(true));
            let expected: Vec<Point> = points.iter().copied().filter(Point::is_defined).collect();
            prop_assert!(same_seq(&out, &expected));
            prop_assert!(out.iter().all(Point::is_defined));
        }

        #[test]
        fn connect_nan_keeps_exactly_valid(points in prop::collection::vec(point(), 0..40)) {
            let out = filter_points(&points, &Config::new().connect_nan(true));
            let expected: Vec<Point> = points.iter().copied().filter(Point::is_nan_valid).collect();
            prop_assert!(same_seq(&out, &expected));
        }

        #[test]
        fn resolution_is_deterministic(name in "[a-zA-Z]{0,12}", vertical in any::<bool>()) {
            let layout = if vertical { Layout::Vertical } else { Layout::Horizontal };
            let curve = CurveType::from(name.as_str());
            let first = resolve(&curve, layout);
            prop_assert_eq!(first, resolve(&curve, layout));
            if !REGISTRY.iter().any(|e| e.key == name) {
                prop_assert_eq!(first, Resolved::Builtin(DEFAULT_CURVE));
            }
        }

        #[test]
        fn output_is_well_formed(
            kind in kind(),
            points in prop::collection::vec(point(), 0..30),
            baseline in prop::option::of(-100.0..100.0f64),
            vertical in any::<bool>(),
        ) {
            let mut config = Config::new().with_curve(kind);
            if vertical {
                config = config.with_layout(Layout::Vertical);
            }
            if let Some(b) = baseline {
                config = config.with_baseline(b);
            }
            let d = curve_path(&points, &config, None).expect("scalar baselines never fail");
            if let Some(d) = d {
                prop_assert!(!d.is_empty());
                prop_assert!(d.chars().all(|c| "MLCZ0123456789.,-eNaInfity".contains(c)), "{}", d);
            }
        }

        #[test]
        fn linear_subpaths_match_defined_runs(points in prop::collection::vec(point(), 0..40)) {
            let runs = points
                .iter()
                .zip(iter::once(None).chain(points.iter().map(Some)))
                .filter(|(p, prev)| p.is_defined() && !prev.is_some_and(Point::is_defined))
                .count();
            let d = curve_path(&points, &Config::new(), None).expect("line");
            let moves = d.map_or(0, |d| d.matches('M').count());
            prop_assert_eq!(moves, runs);
        }
    }
}
