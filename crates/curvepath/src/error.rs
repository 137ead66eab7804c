use thiserror::Error;

/// Errors produced while building a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A per-point baseline has fewer entries than there are points to pair
    /// it with.
    #[error("baseline has {baseline} points but {points} points need a base")]
    BaselineTooShort {
        /// Number of (filtered) data points.
        points: usize,
        /// Number of (filtered) baseline points.
        baseline: usize,
    },
    /// A curve name outside the registry was parsed strictly.
    #[error("unknown curve type: {0}")]
    UnknownCurve(String),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
