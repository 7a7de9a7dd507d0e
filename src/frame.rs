//! The coordinate frame a curve's control points are stored in.

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rigid transform from a curve's local space into its parent's space.
///
/// Control points live in local space.
/// Evaluation results are reported in the parent's space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame(pub Isometry3<f64>);

impl Default for Frame {
    fn default() -> Self {
        Frame::identity()
    }
}

impl Frame {
    /// Local space equals parent space.
    pub fn identity() -> Self {
        Frame(Isometry3::identity())
    }

    /// Frame placed at `translation` without rotation.
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Frame(Isometry3::from_parts(
            Translation3::from(translation),
            UnitQuaternion::identity(),
        ))
    }

    /// The frame's origin in parent space.
    pub fn translation(&self) -> Vector3<f64> {
        self.0.translation.vector
    }

    /// Move the frame's origin, keeping its orientation.
    pub fn set_translation(&mut self, translation: Vector3<f64>) {
        self.0.translation = Translation3::from(translation);
    }

    /// Drop any rotation, keeping the translation.
    pub fn reset_rotation(&mut self) {
        self.0.rotation = UnitQuaternion::identity();
    }

    /// Replace the rotation by a rotation of `degrees` around the up (+Y) axis.
    ///
    /// A positive angle turns +X towards -Z.
    pub fn set_yaw_degrees(&mut self, degrees: f64) {
        self.0.rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), degrees.to_radians());
    }

    /// Rotation around the up axis in degrees, assuming the frame only yaws.
    pub fn yaw_degrees(&self) -> f64 {
        self.0.rotation.scaled_axis().y.to_degrees()
    }

    /// Local point to parent space.
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.0.transform_point(point)
    }

    /// Parent point to local space.
    pub fn inverse_transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.0.inverse_transform_point(point)
    }

    /// Local direction to parent space. Translation doesn't apply.
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.0.transform_vector(vector)
    }
}
