//! Rotation matrix to Euler angles.
//!
//! Both extractions are closed-form: the middle angle comes from a single
//! matrix entry through `asin`, the outer two from `atan2` of a pair of
//! entries that share a `cos(beta)` factor. When `beta` reaches ±90° that
//! factor is zero, both `atan2` arguments vanish, and the outer angles are no
//! longer determined (gimbal lock). Nothing here detects that case.
//!
//! | Order | Rotation decoded | `rot_y` | `rot_x` | `rot_z` |
//! |-------|------------------|---------|---------|---------|
//! | [`EulerOrder::Xyz`] | `Rz(γ)·Ry(β)·Rx(α)` | `asin(-m02)` | `atan2(m12, m22)` | `atan2(m01, m00)` |
//! | [`EulerOrder::Zyx`] | `Rx(α)·Ry(β)·Rz(γ)` | `asin(m20)` | `atan2(-m21, m22)` | `atan2(-m10, m00)` |
//!
//! `m_rc` is buffer index `4r + c`; see [`RotationMatrix`] for how the stored
//! block relates to the decoded rotation.

use std::fmt;

use crate::angle::simplify_angle_rad;
use crate::math::{asin_clamped, atan2};
use crate::matrix::RotationMatrix;

/// Rotations about X, Y and Z in radians.
///
/// Only meaningful together with the [`EulerOrder`] that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
}

impl EulerAngles {
    pub fn new(rot_x: f32, rot_y: f32, rot_z: f32) -> Self {
        Self {
            rot_x,
            rot_y,
            rot_z,
        }
    }

    /// Flattens to `[rot_x, rot_y, rot_z]`.
    pub fn to_array(&self) -> [f32; 3] {
        [self.rot_x, self.rot_y, self.rot_z]
    }

    /// Applies [`simplify_angle_rad`] to each component.
    pub fn simplified(&self) -> Self {
        Self {
            rot_x: simplify_angle_rad(self.rot_x),
            rot_y: simplify_angle_rad(self.rot_y),
            rot_z: simplify_angle_rad(self.rot_z),
        }
    }
}

impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:.6}, y: {:.6}, z: {:.6}) rad",
            self.rot_x, self.rot_y, self.rot_z
        )
    }
}

/// Rotation order convention for Euler extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerOrder {
    /// X first, then Y, then Z.
    Xyz,
    /// Z first, then Y, then X.
    Zyx,
}

impl EulerOrder {
    /// Extracts angles from `matrix` under this order.
    ///
    /// ```
    /// use pose_rotation::{EulerOrder, RotationMatrix};
    ///
    /// let angles = EulerOrder::Zyx.decompose(&RotationMatrix::identity());
    /// assert_eq!(angles.to_array(), [0.0, 0.0, 0.0]);
    /// ```
    pub fn decompose(self, matrix: &RotationMatrix) -> EulerAngles {
        match self {
            Self::Xyz => to_xyz_angle(matrix),
            Self::Zyx => to_zyx_angle(matrix),
        }
    }
}

/// Extracts X→Y→Z Euler angles.
pub fn to_xyz_angle(matrix: &RotationMatrix) -> EulerAngles {
    let m = |r: usize, c: usize| f64::from(matrix.get(r, c));

    let beta = asin_clamped(-m(0, 2));
    let alpha = atan2(m(1, 2), m(2, 2));
    let gamma = atan2(m(0, 1), m(0, 0));

    EulerAngles::new(alpha as f32, beta as f32, gamma as f32)
}

/// Extracts Z→Y→X Euler angles.
pub fn to_zyx_angle(matrix: &RotationMatrix) -> EulerAngles {
    let m = |r: usize, c: usize| f64::from(matrix.get(r, c));

    let beta = asin_clamped(m(2, 0));
    let alpha = atan2(-m(2, 1), m(2, 2));
    let gamma = atan2(-m(1, 0), m(0, 0));

    EulerAngles::new(alpha as f32, beta as f32, gamma as f32)
}
