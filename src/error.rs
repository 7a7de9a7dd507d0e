//! Errors raised when assembling a spline from raw host data.

use thiserror::Error;

/// Reasons raw control points and modes don't form a valid [`BezierSpline`].
///
/// [`BezierSpline`]: crate::BezierSpline
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SplineError {
    /// A spline needs at least one cubic segment.
    #[error("a spline needs at least 4 control points, got {count}")]
    TooFewPoints {
        /// Number of points received
        count: usize,
    },

    /// Points have to come in groups of three after the first anchor.
    #[error("control point count must be 3n + 1, got {count}")]
    PointCount {
        /// Number of points received
        count: usize,
    },

    /// There has to be exactly one mode per anchor.
    #[error("expected {expected} tangent modes, got {found}")]
    ModeCount {
        /// One more than the number of segments
        expected: usize,
        /// Number of modes received
        found: usize,
    },

    /// A looped spline's first and last anchor (and mode) have to coincide.
    #[error("looped spline doesn't close: first and last anchor or mode differ")]
    OpenLoop,
}
