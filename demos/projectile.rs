use bezier_spline::{BezierSpline, Sampled, SplineProjectile, TangentMode};
use nalgebra::Point3;

fn main() {
    env_logger::init();

    let mut spline = BezierSpline::new();
    spline.add_curve();
    spline.set_mode(3, TangentMode::Aligned);
    spline.set_point(1, Point3::new(1.0, 2.0, 0.0));
    spline.set_point(4, Point3::new(4.0, -1.0, 0.0));

    let start = Point3::new(2.0, 0.0, -1.0);
    let end = Point3::new(-4.0, 0.0, 7.0);
    let mut projectile = SplineProjectile::launch(&mut spline, start, end, 0.25, false);

    println!("yaw: {:.2} degrees", spline.frame().yaw_degrees());
    while !projectile.finished() {
        let position = projectile.advance(&spline, 0.5);
        println!("t = {:.3}: {:.3}", projectile.t(), position);
    }

    spline.show_velocity = true;
    spline.iterations = 2;
    for sample in spline.velocity_samples() {
        println!("t = {:.2}: heading {:.3}", sample.t, sample.direction);
    }
}
