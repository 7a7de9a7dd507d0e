use crate::common::samples::SPLINES;
use criterion::{black_box, Criterion};
use nalgebra::Point3;

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval", |b| {
        for spline in SPLINES.iter() {
            b.iter(|| black_box(spline.point_at(black_box(0.37))))
        }
    });
}

pub fn direction(c: &mut Criterion) {
    c.bench_function("direction", |b| {
        for spline in SPLINES.iter() {
            b.iter(|| black_box(spline.direction(black_box(0.37))))
        }
    });
}

pub fn set_point(c: &mut Criterion) {
    c.bench_function("set_point", |b| {
        for spline in SPLINES.iter() {
            let mut spline = spline.clone();
            let index = spline.point_count() / 2;
            b.iter(|| spline.set_point(index, black_box(Point3::new(1.0, 2.0, 3.0))))
        }
    });
}

pub fn modify_curve(c: &mut Criterion) {
    c.bench_function("modify_curve", |b| {
        for spline in SPLINES.iter() {
            let mut spline = spline.clone();
            b.iter(|| spline.modify_curve(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 0.0, 5.0)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    direction(c);
    set_point(c);
    modify_curve(c);
}
