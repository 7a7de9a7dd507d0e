#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bezier;
pub mod curve;
pub mod error;
pub mod frame;
pub mod mode;
pub mod projectile;
pub mod reshape;
pub mod sample;
pub mod spline;

pub use crate::curve::BezierCurve;
pub use crate::error::SplineError;
pub use crate::frame::Frame;
pub use crate::mode::TangentMode;
pub use crate::projectile::SplineProjectile;
pub use crate::sample::{Sample, Sampled};
pub use crate::spline::BezierSpline;

#[cfg(test)]
mod tests {
    use crate::bezier::cubic_point;
    use crate::mode::{anchor_index, mode_index};
    use crate::{BezierSpline, TangentMode};
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    /// Every constrained anchor has its handles in the relation its mode demands.
    fn assert_constraints(spline: &BezierSpline) {
        let last = spline.modes().len() - 1;
        let len = spline.point_count();
        for (k, mode) in spline.modes().iter().enumerate() {
            if !spline.is_loop() && (k == 0 || k == last) {
                continue;
            }
            let middle = anchor_index(k);
            let before = if middle == 0 { len - 2 } else { middle - 1 };
            let after = if middle + 1 >= len { 1 } else { middle + 1 };
            let a = spline.point(before) - spline.point(middle);
            let b = spline.point(after) - spline.point(middle);
            match mode {
                TangentMode::Free => {}
                TangentMode::Mirrored => assert_relative_eq!(a, -b, epsilon = 1e-9),
                TangentMode::Aligned => {
                    if a.norm() > 1e-9 && b.norm() > 1e-9 {
                        assert_relative_eq!(a.normalize(), -b.normalize(), epsilon = 1e-9)
                    }
                }
            }
        }
    }

    fn structure_holds(spline: &BezierSpline) {
        assert_eq!(spline.point_count() % 3, 1);
        assert_eq!(spline.modes().len(), (spline.point_count() - 1) / 3 + 1);
        if spline.is_loop() {
            assert_eq!(spline.point(0), spline.point(spline.point_count() - 1));
            assert_eq!(spline.modes()[0], spline.modes()[spline.modes().len() - 1]);
        }
    }

    #[test]
    fn default_spline() {
        let spline = BezierSpline::new();
        assert_eq!(spline.point_count(), 4);
        assert_eq!(spline.curve_count(), 1);
        assert_eq!(spline.modes(), &[TangentMode::Free, TangentMode::Free]);
        assert!(!spline.is_loop());
        assert_eq!(spline.point_at(0.5), Point3::new(1.5, 0.0, 0.0));
        assert_eq!(
            spline.point_at(0.5),
            cubic_point(
                &spline.point(0),
                &spline.point(1),
                &spline.point(2),
                &spline.point(3),
                0.5
            )
        );
    }

    #[test]
    fn add_curve_to_default() {
        let mut spline = BezierSpline::new();
        spline.add_curve();

        assert_eq!(spline.point_count(), 7);
        assert_eq!(spline.curve_count(), 2);
        assert_eq!(spline.point(4), Point3::new(4.0, 0.0, 0.0));
        assert_eq!(spline.point(5), Point3::new(5.0, 0.0, 0.0));
        assert_eq!(spline.point(6), Point3::new(6.0, 0.0, 0.0));
        assert_eq!(spline.mode(3), TangentMode::Mirrored);
        assert_eq!(
            spline.point(4) - spline.point(3),
            -(spline.point(2) - spline.point(3))
        );
        structure_holds(&spline);
    }

    #[test]
    fn add_curve_copies_last_mode() {
        let mut spline = BezierSpline::new();
        spline.set_mode(3, TangentMode::Aligned);
        spline.add_curve();
        assert_eq!(
            spline.modes(),
            &[TangentMode::Free, TangentMode::Mirrored, TangentMode::Aligned]
        );
    }

    #[test]
    fn ends_are_interpolated() {
        let mut spline = BezierSpline::new();
        for _ in 0..4 {
            spline.add_curve();
            spline.set_point(spline.point_count() - 2, Point3::new(1.0, 2.0, 3.0));
            assert_eq!(spline.point_at(0.0), spline.point(0));
            assert_eq!(spline.point_at(1.0), spline.point(spline.point_count() - 1));
        }
    }

    #[test]
    fn loop_toggle_closes() {
        let mut spline = BezierSpline::new();
        spline.add_curve();
        spline.add_curve();
        spline.set_mode(0, TangentMode::Aligned);
        spline.set_loop(true);

        assert_eq!(spline.point(0), spline.point(spline.point_count() - 1));
        assert_eq!(spline.mode(0), spline.mode(spline.point_count() - 1));
        assert_eq!(spline.mode(spline.point_count() - 1), TangentMode::Aligned);
        structure_holds(&spline);
        assert_constraints(&spline);

        spline.set_loop(false);
        assert!(!spline.is_loop());
        assert_eq!(spline.point(0), spline.point(9));
    }

    #[test]
    fn set_point_is_idempotent_when_free() {
        let mut spline = BezierSpline::new();
        spline.add_curve();
        spline.set_mode(3, TangentMode::Free);
        spline.set_point(4, Point3::new(4.0, 1.0, 0.0));
        let once = spline.clone();
        spline.set_point(4, spline.point(4));
        assert_eq!(spline, once);
        spline.set_point(3, spline.point(3));
        assert_eq!(spline, once);
    }

    #[test]
    fn constraints_survive_edits() {
        let modes = [TangentMode::Free, TangentMode::Aligned, TangentMode::Mirrored];
        for looped in [false, true] {
            let mut spline = BezierSpline::new();
            for _ in 0..3 {
                spline.add_curve();
            }
            spline.set_loop(looped);
            for i in 0..spline.point_count() {
                spline.set_mode(i, modes[i % 3]);
                let offset = Vector3::new(0.5 * i as f64, (i % 4) as f64, -(i as f64));
                spline.set_point(i, spline.point(i) + offset);
                structure_holds(&spline);
                assert_constraints(&spline);
            }
        }
    }

    #[test]
    fn aligned_keeps_enforced_magnitude() {
        let mut spline = BezierSpline::new();
        spline.add_curve();
        spline.set_point(4, Point3::new(3.0, 2.0, 0.0));
        spline.set_mode(4, TangentMode::Aligned);
        let anchor = spline.point(3);
        let length = (spline.point(2) - anchor).norm();
        let handles = [
            Point3::new(5.0, 5.0, 5.0),
            Point3::new(3.0, -1.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
        ];
        for handle in handles {
            spline.set_point(4, handle);
            let enforced = spline.point(2) - anchor;
            assert_relative_eq!(enforced.norm(), length, epsilon = 1e-9);
            assert_relative_eq!(
                enforced.normalize(),
                -(handle - anchor).normalize(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn mode_lookup_by_point_index() {
        let mut spline = BezierSpline::new();
        spline.add_curve();
        spline.add_curve();
        for i in 0..spline.point_count() {
            assert_eq!(spline.mode(i), spline.modes()[mode_index(i)]);
        }
        spline.set_mode(5, TangentMode::Aligned);
        assert_eq!(spline.modes()[2], TangentMode::Aligned);
        assert_eq!(spline.mode(7), TangentMode::Aligned);
    }

    #[test]
    fn zero_tangent_direction() {
        let spline = BezierSpline::from_parts(
            vec![Point3::origin(); 4],
            vec![TangentMode::Free; 2],
            false,
        )
        .unwrap();
        assert_eq!(spline.velocity(0.5), Vector3::zeros());
        assert_eq!(spline.direction(0.5), Vector3::zeros());
    }

    #[test]
    fn direction_is_unit() {
        let mut spline = BezierSpline::new();
        spline.add_curve();
        spline.set_point(1, Point3::new(1.0, 3.0, 0.0));
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert_relative_eq!(spline.direction(t).norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_checks_structure() {
        let mut spline = BezierSpline::new();
        spline.add_curve();
        spline.set_loop(true);
        spline.show_velocity = true;

        let json = serde_json::to_string(&spline).unwrap();
        let back: BezierSpline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spline);

        let broken = r#"{"points":[[0,0,0],[1,0,0],[2,0,0]],"modes":["Free","Free"]}"#;
        let error = serde_json::from_str::<BezierSpline>(broken).unwrap_err();
        assert!(error.to_string().contains("at least 4 control points"));
    }
}
