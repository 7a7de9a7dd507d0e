//! Moving an object along a spline.

use log::debug;
use nalgebra::Point3;

use crate::BezierSpline;

/// Walks a spline from `t = 0` to `t = 1` at a constant parameter speed.
///
/// The speed is in curve parameter per second, not in distance,
/// so the object moves faster along longer or stretched segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineProjectile {
    /// Parameter advance per second
    pub speed: f64,
    /// Start over once the end is reached
    pub looping: bool,
    t: f64,
}

impl SplineProjectile {
    /// Projectile at the start of a spline.
    pub fn new(speed: f64, looping: bool) -> Self {
        SplineProjectile {
            speed,
            looping,
            t: 0.0,
        }
    }

    /// Fit `spline` between `start` and `end` and place a projectile at its start.
    pub fn launch(
        spline: &mut BezierSpline,
        start: Point3<f64>,
        end: Point3<f64>,
        speed: f64,
        looping: bool,
    ) -> Self {
        debug!("launching from {} to {}", start, end);
        spline.modify_curve(start, end);
        SplineProjectile::new(speed, looping)
    }

    /// Current curve parameter.
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Whether a non looping projectile reached the end.
    pub fn finished(&self) -> bool {
        !self.looping && self.t >= 1.0
    }

    /// Step forward by `dt` seconds and return the new position in the spline's parent space.
    ///
    /// A looping projectile jumps back to the start in the step it reaches the end.
    pub fn advance(&mut self, spline: &BezierSpline, dt: f64) -> Point3<f64> {
        self.t = (self.t + dt * self.speed).clamp(0.0, 1.0);
        if self.looping && self.t >= 1.0 {
            self.t = 0.0;
        }
        spline.point_at(self.t)
    }
}
