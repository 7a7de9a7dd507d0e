//! Tangent modes and the index arithmetic coupling control points to anchors.
//!
//! A spline's control points are laid out as `anchor, handle, handle, anchor, ...`.
//! Every third point lies on the curve and owns one [`TangentMode`].
//! A handle belongs to its nearest anchor: points `3k - 1`, `3k` and `3k + 1` all map to mode `k`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constraint between the two handles next to an anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TangentMode {
    /// Both handles move independently.
    #[default]
    Free,

    /// The handles stay colinear through the anchor, each keeping its own distance.
    Aligned,

    /// The handles are point reflections of each other about the anchor.
    Mirrored,
}

/// Index of the mode owning the control point at `point_index`.
pub fn mode_index(point_index: usize) -> usize {
    (point_index + 1) / 3
}

/// Control point index of the anchor owning mode `mode_index`.
pub fn anchor_index(mode_index: usize) -> usize {
    mode_index * 3
}

/// Whether the control point at `point_index` lies on the curve.
pub fn is_anchor(point_index: usize) -> bool {
    point_index % 3 == 0
}
