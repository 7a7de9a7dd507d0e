use bezier_spline::{BezierSpline, TangentMode};
use nalgebra::Point3;
use once_cell::sync::Lazy;

/// Splines of growing length with every kind of constraint
pub static SPLINES: Lazy<Vec<BezierSpline>> = Lazy::new(|| {
    let modes = [TangentMode::Free, TangentMode::Aligned, TangentMode::Mirrored];
    [1, 4, 16, 64]
        .into_iter()
        .map(|segments| {
            let mut spline = BezierSpline::new();
            for _ in 1..segments {
                spline.add_curve();
            }
            for i in 0..spline.point_count() {
                spline.set_mode(i, modes[i % 3]);
                let p = spline.point(i);
                spline.set_point(i, Point3::new(p.x, (i % 5) as f64, (i % 7) as f64 * 0.5));
            }
            spline
        })
        .collect()
});
