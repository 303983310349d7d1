//! Rotation matrix to axis-angle.
//!
//! The generic extraction reads the axis off the skew-symmetric part
//! `(M - Mᵗ) / 2`, whose magnitude is `sin(angle)`. That term vanishes at 0°
//! and 180°, so both angles are detected first and handled separately:
//!
//! | Case | Detection | Axis source |
//! |------|-----------|-------------|
//! | 0° | off-diagonals symmetric, pair sums ≈ 0, trace ≈ 3 | arbitrary, `(1, 0, 0)` |
//! | 180° | off-diagonals symmetric | symmetric part `(M + I) / 2`, pivoted |
//! | otherwise | | skew-symmetric part |
//!
//! At 180°, `(M + I) / 2 = a·aᵗ`: the diagonal holds `a_i²` and the off-diagonals
//! `a_i·a_j`. The largest diagonal entry is used as the pivot so the division
//! that recovers the other two components is by the biggest available value.
//!
//! ```
//! use pose_rotation::{to_axis_angle, RotationMatrix};
//!
//! // Half turn about X: diag(1, -1, -1).
//! let m = RotationMatrix::from_array([
//!     1.0, 0.0, 0.0, 0.0,
//!     0.0, -1.0, 0.0, 0.0,
//!     0.0, 0.0, -1.0, 0.0,
//!     0.0, 0.0, 0.0, 1.0,
//! ]);
//! let aa = to_axis_angle(&m);
//! assert!((aa.angle - std::f32::consts::PI).abs() < 1e-6);
//! assert_eq!(aa.axis, [1.0, 0.0, 0.0]);
//! ```

use std::fmt;

use crate::constants::{
    FALLBACK_AXIS_COMPONENT, IDENTITY_EPSILON, MIN_SKEW_NORM, PI, SYMMETRY_EPSILON,
};
use crate::math::{acos_clamped, sqrt};
use crate::matrix::RotationMatrix;

/// A rotation of `angle` radians about `axis`.
///
/// The axis from the general branch is the skew-symmetric part divided by its
/// norm, which is unit length only for an exactly orthonormal input. Use
/// [`normalized`](Self::normalized) when a unit vector is required.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle {
    /// Rotation angle in radians, `[0, π]`.
    pub angle: f32,
    /// Rotation axis `(x, y, z)`.
    pub axis: [f32; 3],
}

impl AxisAngle {
    /// Zero rotation with the conventional axis `(1, 0, 0)`.
    pub const IDENTITY: Self = Self {
        angle: 0.0,
        axis: [1.0, 0.0, 0.0],
    };

    pub fn new(angle: f32, axis: [f32; 3]) -> Self {
        Self { angle, axis }
    }

    /// Flattens to `[angle, x, y, z]`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.angle, self.axis[0], self.axis[1], self.axis[2]]
    }

    /// Axis scaled by the angle: `[x·angle, y·angle, z·angle]`.
    pub fn rotation_vector(&self) -> [f32; 3] {
        [
            self.axis[0] * self.angle,
            self.axis[1] * self.angle,
            self.axis[2] * self.angle,
        ]
    }

    /// Euclidean length of the axis.
    pub fn axis_norm(&self) -> f32 {
        let [x, y, z] = self.axis.map(f64::from);
        sqrt(x * x + y * y + z * z) as f32
    }

    /// Same angle, axis rescaled to unit length.
    ///
    /// A zero axis is returned unchanged.
    pub fn normalized(&self) -> Self {
        let norm = self.axis_norm();
        if norm == 0.0 {
            return *self;
        }
        Self {
            angle: self.angle,
            axis: self.axis.map(|c| c / norm),
        }
    }
}

impl fmt::Display for AxisAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} rad about ({:.6}, {:.6}, {:.6})",
            self.angle, self.axis[0], self.axis[1], self.axis[2]
        )
    }
}

/// Diagonal term used to recover the axis of a half turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotAxis {
    X,
    Y,
    Z,
}

impl PivotAxis {
    /// Picks the largest of the squared axis components `xx`, `yy`, `zz`.
    ///
    /// Ties resolve towards the later axis.
    pub fn select(xx: f32, yy: f32, zz: f32) -> Self {
        if xx > yy && xx > zz {
            Self::X
        } else if yy > zz {
            Self::Y
        } else {
            Self::Z
        }
    }

    /// Axis returned when even the pivot term is too small to divide by.
    pub fn fallback_axis(self) -> [f32; 3] {
        match self {
            Self::X => [0.0, FALLBACK_AXIS_COMPONENT, FALLBACK_AXIS_COMPONENT],
            Self::Y => [FALLBACK_AXIS_COMPONENT, 0.0, FALLBACK_AXIS_COMPONENT],
            Self::Z => [FALLBACK_AXIS_COMPONENT, FALLBACK_AXIS_COMPONENT, 0.0],
        }
    }
}

/// Converts the rotation block of `matrix` to a single angle about a single axis.
///
/// Always returns a value. Input that is not a proper rotation produces
/// meaningless but finite numbers.
pub fn to_axis_angle(matrix: &RotationMatrix) -> AxisAngle {
    let m = |r: usize, c: usize| matrix.get(r, c);

    let symmetric = (m(1, 0) - m(0, 1)).abs() < SYMMETRY_EPSILON
        && (m(2, 0) - m(0, 2)).abs() < SYMMETRY_EPSILON
        && (m(2, 1) - m(1, 2)).abs() < SYMMETRY_EPSILON;

    if symmetric {
        if is_identity(matrix) {
            log::trace!("axis-angle: identity rotation");
            return AxisAngle::IDENTITY;
        }
        return half_turn(matrix);
    }

    let dx = m(1, 2) - m(2, 1);
    let dy = m(2, 0) - m(0, 2);
    let dz = m(0, 1) - m(1, 0);

    let (dx, dy, dz) = (f64::from(dx), f64::from(dy), f64::from(dz));
    let mut s = sqrt(dx * dx + dy * dy + dz * dz);
    if s.abs() < f64::from(MIN_SKEW_NORM) {
        log::trace!("axis-angle: skew norm {s:e} below floor, using 1");
        s = 1.0;
    }

    let angle = acos_clamped((f64::from(matrix.trace()) - 1.0) / 2.0);

    AxisAngle {
        angle: angle as f32,
        axis: [(dx / s) as f32, (dy / s) as f32, (dz / s) as f32],
    }
}

fn is_identity(matrix: &RotationMatrix) -> bool {
    let m = |r: usize, c: usize| matrix.get(r, c);

    (m(1, 0) + m(0, 1)).abs() < IDENTITY_EPSILON
        && (m(2, 0) + m(0, 2)).abs() < IDENTITY_EPSILON
        && (m(2, 1) + m(1, 2)).abs() < IDENTITY_EPSILON
        && (matrix.trace() - 3.0).abs() < IDENTITY_EPSILON
}

fn half_turn(matrix: &RotationMatrix) -> AxisAngle {
    let m = |r: usize, c: usize| matrix.get(r, c);

    let xx = (m(0, 0) + 1.0) / 2.0;
    let yy = (m(1, 1) + 1.0) / 2.0;
    let zz = (m(2, 2) + 1.0) / 2.0;
    let xy = (m(1, 0) + m(0, 1)) / 4.0;
    let xz = (m(2, 0) + m(0, 2)) / 4.0;
    let yz = (m(2, 1) + m(1, 2)) / 4.0;

    let pivot = PivotAxis::select(xx, yy, zz);
    let pivot_term = match pivot {
        PivotAxis::X => xx,
        PivotAxis::Y => yy,
        PivotAxis::Z => zz,
    };

    let axis = if pivot_term < SYMMETRY_EPSILON {
        log::trace!("axis-angle: half turn, pivot {pivot:?} term {pivot_term} too small");
        pivot.fallback_axis()
    } else {
        let p = sqrt(f64::from(pivot_term)) as f32;
        match pivot {
            PivotAxis::X => [p, xy / p, xz / p],
            PivotAxis::Y => [xy / p, p, yz / p],
            PivotAxis::Z => [xz / p, yz / p, p],
        }
    };

    log::trace!("axis-angle: half turn about {axis:?} (pivot {pivot:?})");

    AxisAngle {
        angle: PI as f32,
        axis,
    }
}
