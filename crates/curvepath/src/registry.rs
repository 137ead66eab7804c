//! Named curve types and their resolution to interpolation strategies.
//!
//! Names are looked up in [`REGISTRY`]. Resolution never fails: a name that is
//! not in the table resolves to [`DEFAULT_CURVE`].

use std::{fmt, ptr, str::FromStr};

use log::debug;

use crate::{
    config::{CurveType, Layout},
    curves::{
        Curve, CurveFactory,
        basis::{Basis, BasisClosed, BasisOpen},
        linear::{Linear, LinearClosed},
        monotone::{MonotoneX, MonotoneY},
        natural::Natural,
        step::Step,
    },
    error::{Error, Result},
};

/// Built-in interpolation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Clamped cubic B-spline.
    Basis,
    /// Closed cubic B-spline.
    BasisClosed,
    /// Open cubic B-spline.
    BasisOpen,
    /// Polyline.
    Linear,
    /// Closed polyline.
    LinearClosed,
    /// Natural cubic spline.
    Natural,
    /// Monotone cubic in x.
    MonotoneX,
    /// Monotone cubic in y.
    MonotoneY,
    /// Step with the riser halfway between points.
    Step,
    /// Step with the riser at the earlier point.
    StepBefore,
    /// Step with the riser at the later point.
    StepAfter,
}

/// Strategy used for names that are not in the registry.
pub const DEFAULT_CURVE: CurveKind = CurveKind::Linear;

impl CurveKind {
    /// Every built-in kind.
    pub const ALL: [Self; 11] = [
        Self::Basis,
        Self::BasisClosed,
        Self::BasisOpen,
        Self::Linear,
        Self::LinearClosed,
        Self::Natural,
        Self::MonotoneX,
        Self::MonotoneY,
        Self::Step,
        Self::StepBefore,
        Self::StepAfter,
    ];

    /// The registry key naming this kind.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Basis => "basis",
            Self::BasisClosed => "basisClosed",
            Self::BasisOpen => "basisOpen",
            Self::Linear => "linear",
            Self::LinearClosed => "linearClosed",
            Self::Natural => "natural",
            Self::MonotoneX => "monotoneX",
            Self::MonotoneY => "monotoneY",
            Self::Step => "step",
            Self::StepBefore => "stepBefore",
            Self::StepAfter => "stepAfter",
        }
    }

    /// Exact lookup by key. Layout-dependent names such as `monotone` are not
    /// kinds; use [`resolve`] for those.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Fresh curve state for this kind.
    pub fn build(self) -> Box<dyn Curve> {
        match self {
            Self::Basis => Box::new(Basis::default()),
            Self::BasisClosed => Box::new(BasisClosed::default()),
            Self::BasisOpen => Box::new(BasisOpen::default()),
            Self::Linear => Box::new(Linear::default()),
            Self::LinearClosed => Box::new(LinearClosed::default()),
            Self::Natural => Box::new(Natural::default()),
            Self::MonotoneX => Box::new(MonotoneX::default()),
            Self::MonotoneY => Box::new(MonotoneY::default()),
            Self::Step => Box::new(Step::middle()),
            Self::StepBefore => Box::new(Step::before()),
            Self::StepAfter => Box::new(Step::after()),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| Error::UnknownCurve(s.to_string()))
    }
}

impl CurveFactory for CurveKind {
    fn name(&self) -> &str {
        self.key()
    }

    fn curve(&self) -> Box<dyn Curve> {
        self.build()
    }
}

/// How a registry name picks its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Always the same kind.
    Fixed(CurveKind),
    /// Depends on the chart layout.
    ByLayout {
        /// Kind used for horizontal layouts.
        horizontal: CurveKind,
        /// Kind used for vertical layouts.
        vertical: CurveKind,
    },
}

impl Selector {
    /// The kind selected for `layout`.
    pub const fn select(self, layout: Layout) -> CurveKind {
        match (self, layout) {
            (Self::Fixed(kind), _) => kind,
            (Self::ByLayout { horizontal, .. }, Layout::Horizontal) => horizontal,
            (Self::ByLayout { vertical, .. }, Layout::Vertical) => vertical,
        }
    }
}

/// Metadata for a named curve type.
#[derive(Clone, Copy, Debug)]
pub struct CurveEntry {
    /// Name accepted in configuration.
    pub key: &'static str,
    /// Human-readable name.
    pub display: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Kind selection.
    pub selector: Selector,
}

/// All named curve types.
pub const REGISTRY: &[CurveEntry] = &[
    CurveEntry {
        key: "basis",
        display: "Basis",
        summary: "cubic B-spline through the end points",
        selector: Selector::Fixed(CurveKind::Basis),
    },
    CurveEntry {
        key: "basisClosed",
        display: "Basis (closed)",
        summary: "closed cubic B-spline",
        selector: Selector::Fixed(CurveKind::BasisClosed),
    },
    CurveEntry {
        key: "basisOpen",
        display: "Basis (open)",
        summary: "cubic B-spline that stops short of the end points",
        selector: Selector::Fixed(CurveKind::BasisOpen),
    },
    CurveEntry {
        key: "linear",
        display: "Linear",
        summary: "straight segments",
        selector: Selector::Fixed(CurveKind::Linear),
    },
    CurveEntry {
        key: "linearClosed",
        display: "Linear (closed)",
        summary: "straight segments closed into a polygon",
        selector: Selector::Fixed(CurveKind::LinearClosed),
    },
    CurveEntry {
        key: "natural",
        display: "Natural",
        summary: "natural cubic spline through every point",
        selector: Selector::Fixed(CurveKind::Natural),
    },
    CurveEntry {
        key: "monotone",
        display: "Monotone",
        summary: "monotone cubic along the layout's independent axis",
        selector: Selector::ByLayout {
            horizontal: CurveKind::MonotoneX,
            vertical: CurveKind::MonotoneY,
        },
    },
    CurveEntry {
        key: "monotoneX",
        display: "Monotone X",
        summary: "monotone cubic in x",
        selector: Selector::Fixed(CurveKind::MonotoneX),
    },
    CurveEntry {
        key: "monotoneY",
        display: "Monotone Y",
        summary: "monotone cubic in y",
        selector: Selector::Fixed(CurveKind::MonotoneY),
    },
    CurveEntry {
        key: "step",
        display: "Step",
        summary: "steps halfway between points",
        selector: Selector::Fixed(CurveKind::Step),
    },
    CurveEntry {
        key: "stepBefore",
        display: "Step before",
        summary: "steps at the earlier point",
        selector: Selector::Fixed(CurveKind::StepBefore),
    },
    CurveEntry {
        key: "stepAfter",
        display: "Step after",
        summary: "steps at the later point",
        selector: Selector::Fixed(CurveKind::StepAfter),
    },
];

/// Registry keys, in registry order.
pub const CURVE_NAMES: &[&str] = &[
    "basis",
    "basisClosed",
    "basisOpen",
    "linear",
    "linearClosed",
    "natural",
    "monotone",
    "monotoneX",
    "monotoneY",
    "step",
    "stepBefore",
    "stepAfter",
];

/// Find a registry entry by exact key.
pub fn lookup(key: &str) -> Option<&'static CurveEntry> {
    REGISTRY.iter().find(|e| e.key == key)
}

/// A resolved interpolation strategy.
#[derive(Clone, Copy, Debug)]
pub enum Strategy<'a> {
    /// A built-in kind.
    Builtin(CurveKind),
    /// A caller-supplied factory.
    Custom(&'a dyn CurveFactory),
}

impl Strategy<'_> {
    /// Fresh curve state.
    pub fn curve(&self) -> Box<dyn Curve> {
        match self {
            Self::Builtin(kind) => kind.build(),
            Self::Custom(factory) => factory.curve(),
        }
    }

    /// The built-in kind, if this is one.
    pub fn kind(&self) -> Option<CurveKind> {
        match self {
            Self::Builtin(kind) => Some(*kind),
            Self::Custom(_) => None,
        }
    }

    /// Name for diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(kind) => kind.key(),
            Self::Custom(factory) => factory.name(),
        }
    }
}

impl PartialEq for Strategy<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => ptr::addr_eq(ptr::from_ref(*a), ptr::from_ref(*b)),
            _ => false,
        }
    }
}

/// Resolve a curve type for `layout`.
///
/// Custom factories are returned as they are. Names go through [`REGISTRY`];
/// unknown names fall back to [`DEFAULT_CURVE`].
pub fn resolve(curve: &CurveType, layout: Layout) -> Strategy<'_> {
    match curve {
        CurveType::Custom(factory) => Strategy::Custom(factory.as_ref()),
        CurveType::Named(name) => match lookup(name) {
            Some(entry) => Strategy::Builtin(entry.selector.select(layout)),
            None => {
                debug!("unknown curve type {name:?}, using {DEFAULT_CURVE}");
                Strategy::Builtin(DEFAULT_CURVE)
            }
        },
    }
}
