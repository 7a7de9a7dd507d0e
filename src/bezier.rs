//! Closed form evaluation of quadratic and cubic bezier curves.
//!
//! All functions are generic over the scalar type and the dimension of the points,
//! so the same code serves 2D and 3D curves.
//!
//! The position functions clamp `t` into `[0, 1]`.
//! [`cubic_tangent`] clamps as well while [`quadratic_tangent`] doesn't,
//! so a quadratic derivative may be extrapolated outside of the curve.

use nalgebra::{convert, Point, RealField, SVector};

/// Get the point on a quadratic curve at position `t`.
///
/// `(1-t)^2 p0 + 2(1-t)t p1 + t^2 p2`
pub fn quadratic_point<T: RealField + Copy, const D: usize>(
    p0: &Point<T, D>,
    p1: &Point<T, D>,
    p2: &Point<T, D>,
    t: T,
) -> Point<T, D> {
    let two: T = convert(2.0);
    let t = t.clamp(T::zero(), T::one());
    let t_inv = T::one() - t;

    Point::from(p0.coords * (t_inv * t_inv) + p1.coords * (two * t_inv * t) + p2.coords * (t * t))
}

/// Computes a quadratic curve's (unnormalized) tangent vector at `t`.
///
/// `2(1-t)(p1-p0) + 2t(p2-p1)`
///
/// *`t` is not clamped!*
pub fn quadratic_tangent<T: RealField + Copy, const D: usize>(
    p0: &Point<T, D>,
    p1: &Point<T, D>,
    p2: &Point<T, D>,
    t: T,
) -> SVector<T, D> {
    let two: T = convert(2.0);
    (p1 - p0) * (two * (T::one() - t)) + (p2 - p1) * (two * t)
}

/// Get the point on a cubic curve at position `t`.
///
/// `(1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t)t^2 p2 + t^3 p3`
pub fn cubic_point<T: RealField + Copy, const D: usize>(
    p0: &Point<T, D>,
    p1: &Point<T, D>,
    p2: &Point<T, D>,
    p3: &Point<T, D>,
    t: T,
) -> Point<T, D> {
    let three: T = convert(3.0);
    let t = t.clamp(T::zero(), T::one());
    let t_inv = T::one() - t;

    Point::from(
        p0.coords * (t_inv * t_inv * t_inv)
            + p1.coords * (three * t_inv * t_inv * t)
            + p2.coords * (three * t_inv * t * t)
            + p3.coords * (t * t * t),
    )
}

/// Computes a cubic curve's tangent vector at `t`.
///
/// `3(1-t)^2 (p1-p0) + 6(1-t)t (p2-p1) + 3t^2 (p3-p2)`
///
/// *The resulting vector is not normalized!*
pub fn cubic_tangent<T: RealField + Copy, const D: usize>(
    p0: &Point<T, D>,
    p1: &Point<T, D>,
    p2: &Point<T, D>,
    p3: &Point<T, D>,
    t: T,
) -> SVector<T, D> {
    let three: T = convert(3.0);
    let six: T = convert(6.0);
    let t = t.clamp(T::zero(), T::one());
    let t_inv = T::one() - t;

    (p1 - p0) * (three * t_inv * t_inv)
        + (p2 - p1) * (six * t_inv * t)
        + (p3 - p2) * (three * t * t)
}

/// Normalizes `vector`, returning the zero vector for vectors too short to have a direction.
pub fn normalize_or_zero<T: RealField + Copy, const D: usize>(
    vector: &SVector<T, D>,
) -> SVector<T, D> {
    vector
        .try_normalize(convert(1.0e-5))
        .unwrap_or_else(SVector::zeros)
}

/// A single cubic bezier curve given by its four control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment<T: RealField + Copy, const D: usize>(pub [Point<T, D>; 4]);

impl<T: RealField + Copy, const D: usize> CubicSegment<T, D> {
    /// Construct a segment from its start, its two handles and its end.
    pub fn new(p0: Point<T, D>, p1: Point<T, D>, p2: Point<T, D>, p3: Point<T, D>) -> Self {
        CubicSegment([p0, p1, p2, p3])
    }

    /// Get the point on the segment at position `t` (clamped).
    pub fn point(&self, t: T) -> Point<T, D> {
        let [p0, p1, p2, p3] = &self.0;
        cubic_point(p0, p1, p2, p3, t)
    }

    /// Computes the segment's tangent vector at `t` (clamped).
    ///
    /// *The resulting vector is not normalized!*
    pub fn tangent(&self, t: T) -> SVector<T, D> {
        let [p0, p1, p2, p3] = &self.0;
        cubic_tangent(p0, p1, p2, p3, t)
    }
}
