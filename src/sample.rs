//! Evenly spaced samples of a curve for drawing it or its direction of travel.

use nalgebra::{Point3, Vector3};

use crate::curve::BezierCurve;
use crate::spline::BezierSpline;

/// Position and unit direction at one parameter value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Global curve parameter in `[0, 1]`
    pub t: f64,
    /// Point in parent space
    pub position: Point3<f64>,
    /// Unit direction in parent space
    pub direction: Vector3<f64>,
}

/// Anything which can be walked from `t = 0` to `t = 1`.
pub trait Sampled {
    /// Get the point at position `t` in parent space.
    fn point_at(&self, t: f64) -> Point3<f64>;

    /// Unit direction of travel at `t` in parent space.
    fn direction(&self, t: f64) -> Vector3<f64>;

    /// Number of steps [`velocity_samples`] divides the curve into.
    ///
    /// [`velocity_samples`]: Sampled::velocity_samples
    fn velocity_steps(&self) -> usize;

    /// Whether direction samples should be drawn at all.
    fn show_velocity(&self) -> bool;

    /// `steps + 1` samples at `t = i / steps`.
    ///
    /// Zero steps yield only the start.
    fn samples(&self, steps: usize) -> Vec<Sample> {
        let sample = |t: f64| Sample {
            t,
            position: self.point_at(t),
            direction: self.direction(t),
        };

        let mut samples = Vec::with_capacity(steps + 1);
        samples.push(sample(0.0));
        for i in 1..=steps {
            samples.push(sample(i as f64 / steps as f64));
        }
        samples
    }

    /// Direction samples for display, empty if `show_velocity` is off.
    fn velocity_samples(&self) -> Vec<Sample> {
        if !self.show_velocity() {
            return Vec::new();
        }
        self.samples(self.velocity_steps())
    }
}

impl Sampled for BezierSpline {
    fn point_at(&self, t: f64) -> Point3<f64> {
        BezierSpline::point_at(self, t)
    }

    fn direction(&self, t: f64) -> Vector3<f64> {
        BezierSpline::direction(self, t)
    }

    /// Every segment gets `iterations` steps.
    fn velocity_steps(&self) -> usize {
        self.iterations * self.curve_count()
    }

    fn show_velocity(&self) -> bool {
        self.show_velocity
    }
}

impl Sampled for BezierCurve {
    fn point_at(&self, t: f64) -> Point3<f64> {
        BezierCurve::point_at(self, t)
    }

    fn direction(&self, t: f64) -> Vector3<f64> {
        BezierCurve::direction(self, t)
    }

    fn velocity_steps(&self) -> usize {
        self.iterations
    }

    fn show_velocity(&self) -> bool {
        self.show_velocity
    }
}
