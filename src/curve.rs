//! A lone cubic curve without any handle constraints.

use nalgebra::{Point3, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bezier::{cubic_point, cubic_tangent, normalize_or_zero};
use crate::frame::Frame;
use crate::spline::DEFAULT_ITERATIONS;

/// Single cubic bezier curve whose control points are edited directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierCurve {
    /// Start, two handles and end in local space.
    pub points: [Point3<f64>; 4],
    /// Local space of `points`.
    pub frame: Frame,
    /// Direction samples drawn when `show_velocity` is set.
    pub iterations: usize,
    /// Whether a renderer should draw direction samples.
    pub show_velocity: bool,
}

impl Default for BezierCurve {
    fn default() -> Self {
        BezierCurve {
            points: [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(3.0, 0.0, 0.0),
            ],
            frame: Frame::identity(),
            iterations: DEFAULT_ITERATIONS,
            show_velocity: false,
        }
    }
}

impl BezierCurve {
    /// Straight curve from the origin along +X.
    pub fn new() -> Self {
        BezierCurve::default()
    }

    /// Put the control points back on the default straight line.
    pub fn reset(&mut self) {
        self.points = BezierCurve::default().points;
    }

    /// Get the point at position `t` in parent space.
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        let [p0, p1, p2, p3] = &self.points;
        self.frame.transform_point(&cubic_point(p0, p1, p2, p3, t))
    }

    /// Computes the curve's tangent vector at `t` in parent space.
    ///
    /// *The resulting vector is not normalized!*
    pub fn velocity(&self, t: f64) -> Vector3<f64> {
        let [p0, p1, p2, p3] = &self.points;
        self.frame.transform_vector(&cubic_tangent(p0, p1, p2, p3, t))
    }

    /// Unit direction of travel at `t` in parent space.
    pub fn direction(&self, t: f64) -> Vector3<f64> {
        normalize_or_zero(&self.velocity(t))
    }
}
