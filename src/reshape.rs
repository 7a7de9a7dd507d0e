//! Fitting a whole spline between two new end points.

use log::{debug, warn};
use nalgebra::{distance, Point3, Vector3};

use crate::bezier::normalize_or_zero;
use crate::mode::is_anchor;
use crate::BezierSpline;

/// Angle in degrees between `chord` and the +X axis, signed by the side of the up axis.
///
/// The angle is negated unless the cross product with +X has a Y component of at least `1`.
/// So short chords always count as negative, no matter which side they point to.
pub fn signed_chord_angle(chord: &Vector3<f64>) -> f64 {
    let right = Vector3::x();
    let angle = unsigned_angle(chord, &right);
    if chord.cross(&right).y < 1.0 {
        -angle
    } else {
        angle
    }
}

/// Angle in degrees between two vectors, `0` if either has no length.
fn unsigned_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let norms = (a.norm_squared() * b.norm_squared()).sqrt();
    if norms < 1.0e-15 {
        return 0.0;
    }
    (a.dot(b) / norms).clamp(-1.0, 1.0).acos().to_degrees()
}

impl BezierSpline {
    /// Rotate, stretch and move the spline so it runs from `start` to `end`.
    ///
    /// `start` and `end` are given in parent space. The frame is yawed so the old chord
    /// points along the new one, anchors are shifted by a blend of the two end point
    /// displacements weighted by their segment index and handles are scaled by the ratio
    /// of the chord lengths.
    ///
    /// All points are written through [`set_point`] in ascending order,
    /// so constraints fire and later handles see already moved anchors.
    ///
    /// A spline whose ends coincide can't be scaled and is left untouched.
    ///
    /// [`set_point`]: BezierSpline::set_point
    pub fn modify_curve(&mut self, start: Point3<f64>, end: Point3<f64>) {
        let last = self.point_count() - 1;
        let original_start = self.point(0);
        let original_end = self.point(last);

        let original_length = distance(&original_start, &original_end);
        if original_length == 0.0 {
            warn!("can't reshape a spline whose ends coincide");
            return;
        }

        self.frame_mut().reset_rotation();

        let original_chord = self.frame().transform_point(&original_end)
            - self.frame().transform_point(&original_start);
        let original_angle = signed_chord_angle(&original_chord);
        let new_angle = signed_chord_angle(&(end - start));
        self.frame_mut().set_yaw_degrees(original_angle - new_angle);

        let scale = distance(&start, &end) / original_length;
        debug!(
            "reshaping {} segments: yaw {} scale {}",
            self.curve_count(),
            original_angle - new_angle,
            scale
        );

        let start_shift = self.frame().inverse_transform_point(&start) - original_start;
        let end_shift = self.frame().inverse_transform_point(&end) - original_end;

        let curve_count = self.curve_count() as f64;
        for i in 0..self.point_count() {
            if is_anchor(i) {
                let t = (i / 3) as f64 / curve_count;
                let position = self.point(i) + start_shift * (1.0 - t) + end_shift * t;
                self.set_point(i, position);
            } else {
                // Incoming handles belong to the next anchor, outgoing ones to the previous
                let anchor = if i % 3 == 2 { self.point(i + 1) } else { self.point(i - 1) };
                let handle = self.point(i);
                let direction = normalize_or_zero(&(handle - anchor));
                let length = distance(&handle, &anchor) * scale;
                self.set_point(i, anchor + direction * length);
            }
        }
    }
}
