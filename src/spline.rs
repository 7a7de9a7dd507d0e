//! A chain of cubic bezier curves with constrained handles.

use log::{debug, trace};
use nalgebra::{distance, Point3, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::bezier::{normalize_or_zero, CubicSegment};
use crate::error::SplineError;
use crate::frame::Frame;
use crate::mode::{anchor_index, is_anchor, mode_index, TangentMode};

/// Default number of direction samples per segment.
pub const DEFAULT_ITERATIONS: usize = 10;

/// Spline made of cubic bezier segments sharing their end points.
///
/// Control points are stored as `anchor, handle, handle, anchor, ...`
/// so there are always `3 * curve_count + 1` of them.
/// Each anchor carries a [`TangentMode`] constraining its two adjacent handles.
///
/// Single segment splines are stored on the stack.
///
/// Indices passed to any method have to be in range, otherwise it panics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "SplineParts")
)]
pub struct BezierSpline {
    points: SmallVec<[Point3<f64>; 4]>,
    modes: SmallVec<[TangentMode; 2]>,
    looped: bool,
    frame: Frame,
    /// Direction samples per segment drawn when `show_velocity` is set.
    pub iterations: usize,
    /// Whether a renderer should draw direction samples.
    pub show_velocity: bool,
}

impl Default for BezierSpline {
    fn default() -> Self {
        BezierSpline {
            points: default_points(),
            modes: smallvec![TangentMode::Free, TangentMode::Free],
            looped: false,
            frame: Frame::identity(),
            iterations: DEFAULT_ITERATIONS,
            show_velocity: false,
        }
    }
}

fn default_points() -> SmallVec<[Point3<f64>; 4]> {
    smallvec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(3.0, 0.0, 0.0),
    ]
}

impl BezierSpline {
    /// A single straight segment from the origin along +X with free modes.
    pub fn new() -> Self {
        BezierSpline::default()
    }

    /// Assemble a spline from raw data, checking its structure.
    ///
    /// The tangent modes are not enforced, the points are taken as they are.
    pub fn from_parts(
        points: Vec<Point3<f64>>,
        modes: Vec<TangentMode>,
        looped: bool,
    ) -> Result<Self, SplineError> {
        let count = points.len();
        if count < 4 {
            return Err(SplineError::TooFewPoints { count });
        }
        if count % 3 != 1 {
            return Err(SplineError::PointCount { count });
        }
        let expected = (count - 1) / 3 + 1;
        if modes.len() != expected {
            return Err(SplineError::ModeCount {
                expected,
                found: modes.len(),
            });
        }
        if looped && (points[0] != points[count - 1] || modes[0] != modes[expected - 1]) {
            return Err(SplineError::OpenLoop);
        }

        Ok(BezierSpline {
            points: SmallVec::from_vec(points),
            modes: SmallVec::from_vec(modes),
            looped,
            ..BezierSpline::default()
        })
    }

    /// Back to a single straight segment with free modes and no loop.
    ///
    /// Frame and display settings are kept.
    pub fn reset(&mut self) {
        debug!("resetting spline of {} segments", self.curve_count());
        self.points = default_points();
        self.modes = smallvec![TangentMode::Free, TangentMode::Free];
        self.looped = false;
    }

    /// Number of control points, anchors and handles alike.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of cubic segments.
    pub fn curve_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// All control points in local space.
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// One tangent mode per anchor.
    pub fn modes(&self) -> &[TangentMode] {
        &self.modes
    }

    /// Get a control point in local space.
    pub fn point(&self, index: usize) -> Point3<f64> {
        self.points[index]
    }

    /// Move a control point and keep the constraints intact.
    ///
    /// Moving an anchor drags its handles along.
    /// In a loop the first and last anchor are the same point and move together.
    /// Afterwards the mode of the anchor owning `index` is enforced,
    /// which may move the handle opposite of `index`.
    pub fn set_point(&mut self, index: usize, position: Point3<f64>) {
        if is_anchor(index) {
            let delta = position - self.points[index];
            let last = self.points.len() - 1;
            if self.looped {
                if index == 0 {
                    self.points[1] += delta;
                    self.points[last - 1] += delta;
                    self.points[last] = position;
                } else if index == last {
                    self.points[0] = position;
                    self.points[1] += delta;
                    self.points[index - 1] += delta;
                } else {
                    self.points[index - 1] += delta;
                    self.points[index + 1] += delta;
                }
            } else {
                if index > 0 {
                    self.points[index - 1] += delta;
                }
                if index < last {
                    self.points[index + 1] += delta;
                }
            }
        }

        trace!("point {} -> {}", index, position);
        self.points[index] = position;
        self.enforce_mode(index);
    }

    /// Mode of the anchor owning the control point at `index`.
    pub fn mode(&self, index: usize) -> TangentMode {
        self.modes[mode_index(index)]
    }

    /// Change the mode of the anchor owning the control point at `index`.
    ///
    /// The handle on the other side of the anchor than `index` is adjusted.
    pub fn set_mode(&mut self, index: usize, mode: TangentMode) {
        let mode_index = mode_index(index);
        let last = self.modes.len() - 1;
        self.modes[mode_index] = mode;
        if self.looped {
            if mode_index == 0 {
                self.modes[last] = mode;
            } else if mode_index == last {
                self.modes[0] = mode;
            }
        }
        self.enforce_mode(index);
    }

    /// Whether the last anchor is joined to the first one.
    pub fn is_loop(&self) -> bool {
        self.looped
    }

    /// Join or split the spline's ends.
    ///
    /// Joining copies the first mode to the last anchor and moves the last anchor onto the first.
    pub fn set_loop(&mut self, looped: bool) {
        debug!("loop {} -> {}", self.looped, looped);
        self.looped = looped;
        if looped {
            let last = self.modes.len() - 1;
            self.modes[last] = self.modes[0];
            self.set_point(0, self.points[0]);
        }
    }

    /// Re-apply the mode of the anchor owning `index`.
    ///
    /// The handle on the same side as `index` is kept, the opposite one is rewritten.
    /// Free anchors and the ends of an open spline are left alone.
    pub fn enforce_mode(&mut self, index: usize) {
        let (fixed, enforced) = match self.constraint_pair(index) {
            Some(pair) => pair,
            None => return,
        };
        let mode = self.modes[mode_index(index)];
        let middle = anchor_index(mode_index(index));

        let middle_point = self.points[middle];
        let mut tangent = middle_point - self.points[fixed];
        if mode == TangentMode::Aligned {
            tangent = normalize_or_zero(&tangent) * distance(&middle_point, &self.points[enforced]);
        }

        trace!("{:?} at {}: point {} -> {}", mode, middle, enforced, middle_point + tangent);
        self.points[enforced] = middle_point + tangent;
    }

    /// The handles `(fixed, enforced)` the mode owning `index` acts on.
    ///
    /// The handle on the side of `index` is kept, the other one is rewritten.
    /// In a loop the end anchors reach across the seam, skipping the duplicated point.
    /// `None` for free anchors and for the ends of an open spline.
    fn constraint_pair(&self, index: usize) -> Option<(usize, usize)> {
        let mode_index = mode_index(index);
        if self.modes[mode_index] == TangentMode::Free
            || !self.looped && (mode_index == 0 || mode_index == self.modes.len() - 1)
        {
            return None;
        }

        let len = self.points.len();
        let before = |middle: usize| middle.checked_sub(1).unwrap_or(len - 2);
        let after = |middle: usize| if middle + 1 >= len { 1 } else { middle + 1 };

        let middle = anchor_index(mode_index);
        if index <= middle {
            Some((before(middle), after(middle)))
        } else {
            Some((after(middle), before(middle)))
        }
    }

    /// Append a segment continuing along local +X.
    ///
    /// The old end becomes a mirrored anchor.
    /// In a loop the new end is joined to the first anchor again.
    pub fn add_curve(&mut self) {
        let mut point = self.points[self.points.len() - 1];
        for _ in 0..3 {
            point.x += 1.0;
            self.points.push(point);
        }
        let mode = self.modes[self.modes.len() - 1];
        self.modes.push(mode);

        let junction = self.points.len() - 4;
        self.set_mode(junction, TangentMode::Mirrored);
        self.enforce_mode(junction);

        if self.looped {
            let last = self.points.len() - 1;
            self.points[last] = self.points[0];
            let last = self.modes.len() - 1;
            self.modes[last] = self.modes[0];
            self.enforce_mode(0);
        }
        debug!("added segment, now {} segments", self.curve_count());
    }

    /// The frame control points are stored in.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Mutable access to the frame. Moving the frame moves the whole curve.
    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    /// The `segment`th cubic curve in local space.
    pub fn segment(&self, segment: usize) -> CubicSegment<f64, 3> {
        let i = segment * 3;
        CubicSegment::new(
            self.points[i],
            self.points[i + 1],
            self.points[i + 2],
            self.points[i + 3],
        )
    }

    /// Map a global `t` to a segment and a position inside that segment.
    ///
    /// `t` is clamped to `[0, 1]`; `t >= 1` maps to the end of the last segment.
    pub fn locate(&self, t: f64) -> (usize, f64) {
        if t >= 1.0 {
            return (self.curve_count() - 1, 1.0);
        }
        let t = t.clamp(0.0, 1.0) * self.curve_count() as f64;
        let segment = t.floor();
        (segment as usize, t - segment)
    }

    /// Get the point at global position `t` in parent space.
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        let (segment, t) = self.locate(t);
        self.frame.transform_point(&self.segment(segment).point(t))
    }

    /// Computes the spline's tangent vector at `t` in parent space.
    ///
    /// This is the derivative of the segment `t` falls into,
    /// not scaled by the number of segments.
    ///
    /// *The resulting vector is not normalized!*
    pub fn velocity(&self, t: f64) -> Vector3<f64> {
        let (segment, t) = self.locate(t);
        self.frame.transform_vector(&self.segment(segment).tangent(t))
    }

    /// Unit direction of travel at `t` in parent space.
    ///
    /// Zero where the tangent vanishes.
    pub fn direction(&self, t: f64) -> Vector3<f64> {
        normalize_or_zero(&self.velocity(t))
    }
}

/// Serialized form of a [`BezierSpline`] before it is checked.
#[cfg(any(feature = "serde", test))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
struct SplineParts {
    points: Vec<Point3<f64>>,
    modes: Vec<TangentMode>,
    #[cfg_attr(feature = "serde", serde(default))]
    looped: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    frame: Frame,
    #[cfg_attr(feature = "serde", serde(default = "default_iterations"))]
    iterations: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    show_velocity: bool,
}

#[cfg(feature = "serde")]
fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

#[cfg(any(feature = "serde", test))]
impl TryFrom<SplineParts> for BezierSpline {
    type Error = SplineError;

    fn try_from(parts: SplineParts) -> Result<Self, Self::Error> {
        let mut spline = BezierSpline::from_parts(parts.points, parts.modes, parts.looped)?;
        spline.frame = parts.frame;
        spline.iterations = parts.iterations;
        spline.show_velocity = parts.show_velocity;
        Ok(spline)
    }
}
