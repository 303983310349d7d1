//! Read-only view over a flat 4x4 pose matrix.
//!
//! Pose trackers hand out camera and target transforms as 16 single-precision
//! floats. This crate only cares about the rotation block inside that buffer:
//!
//! ```text
//! index:  0  1  2 |  3        m00 m01 m02 | .
//!         4  5  6 |  7   ->   m10 m11 m12 | .
//!         8  9 10 | 11        m20 m21 m22 | .
//!        ---------+---        ------------+--
//!        12 13 14 | 15         .   .   .  | .
//! ```
//!
//! Element `m_rc` lives at index `4 * r + c` (row-major, stride 4). Indices 3,
//! 7, 11 and 12-15 hold translation and the projective row; nothing in this
//! crate reads them.
//!
//! # Orientation of the stored block
//!
//! OpenGL-style trackers write the rotation `R` column by column, so the
//! row-major block `M` read here is `R` transposed. Every extraction formula
//! in [`decompose`](crate::decompose) is written against `M` and returns the
//! parameters of `R`: the rotation the tracker actually reported.
//!
//! # Validation
//!
//! Construction never checks orthonormality. The decomposition functions
//! assume a proper rotation and degrade quietly when given something else.
//! [`RotationMatrix::is_proper_rotation`] exists for callers who want to check
//! their input up front.

use std::fmt;

use crate::constants::{MATRIX_LEN, ROW_STRIDE};
use crate::errors::{RotationError, RotationResult};

/// A 4x4 pose matrix whose upper-left 3x3 block is read as a rotation.
///
/// ```
/// use pose_rotation::RotationMatrix;
///
/// let pose: [f32; 16] = [
///     1.0, 0.0, 0.0, 0.0,
///     0.0, 1.0, 0.0, 0.0,
///     0.0, 0.0, 1.0, 0.0,
///     0.3, -1.2, 4.0, 1.0,
/// ];
/// let m = RotationMatrix::from_array(pose);
/// assert_eq!(m.trace(), 3.0);
/// assert_eq!(m, RotationMatrix::identity().with_translation([0.3, -1.2, 4.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix {
    elements: [f32; MATRIX_LEN],
}

impl RotationMatrix {
    /// The 4x4 identity.
    pub fn identity() -> Self {
        let mut elements = [0.0; MATRIX_LEN];
        for i in 0..ROW_STRIDE {
            elements[i * ROW_STRIDE + i] = 1.0;
        }
        Self { elements }
    }

    /// Wraps a flat row-major 4x4 buffer.
    ///
    /// This does not validate that the rotation block is orthonormal.
    pub fn from_array(elements: [f32; MATRIX_LEN]) -> Self {
        Self { elements }
    }

    /// Copies a flat buffer of unknown length.
    ///
    /// Returns [`RotationError::InvalidLength`] unless the slice holds exactly
    /// 16 elements.
    pub fn from_slice(values: &[f32]) -> RotationResult<Self> {
        let elements: [f32; MATRIX_LEN] = values
            .try_into()
            .map_err(|_| RotationError::invalid_length(MATRIX_LEN, values.len()))?;
        Ok(Self { elements })
    }

    /// Returns a copy with the translation column replaced.
    ///
    /// The rotation block is untouched, so decompositions are unaffected.
    pub fn with_translation(mut self, translation: [f32; 3]) -> Self {
        self.elements[12] = translation[0];
        self.elements[13] = translation[1];
        self.elements[14] = translation[2];
        self
    }

    /// Returns the element at `row`, `col` of the 4x4 buffer.
    ///
    /// Indices are 0-based. Panics if `row >= 4` or `col >= 4`.
    ///
    /// You can also use indexing syntax: `matrix[(row, col)]`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(col < ROW_STRIDE, "column index {col} out of range");
        self.elements[row * ROW_STRIDE + col]
    }

    /// Returns the underlying flat buffer.
    pub fn as_array(&self) -> &[f32; MATRIX_LEN] {
        &self.elements
    }

    /// Sum of the rotation block's diagonal, `1 + 2cos(angle)` for a proper rotation.
    pub fn trace(&self) -> f32 {
        self.elements[0] + self.elements[5] + self.elements[10]
    }

    /// Determinant of the 3x3 rotation block.
    ///
    /// +1 for a proper rotation, -1 for a reflection.
    pub fn determinant(&self) -> f64 {
        let m = |r: usize, c: usize| f64::from(self.get(r, c));

        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Checks whether the rotation block is a proper rotation within `tolerance`.
    ///
    /// Rows must be unit length and mutually orthogonal, and the determinant must
    /// be +1. The decomposition functions never call this.
    ///
    /// ```
    /// use pose_rotation::RotationMatrix;
    ///
    /// assert!(RotationMatrix::identity().is_proper_rotation(1e-6));
    ///
    /// let mut mirrored = *RotationMatrix::identity().as_array();
    /// mirrored[0] = -1.0;
    /// assert!(!RotationMatrix::from_array(mirrored).is_proper_rotation(1e-6));
    /// ```
    pub fn is_proper_rotation(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        let row = |r: usize| {
            [
                f64::from(self.get(r, 0)),
                f64::from(self.get(r, 1)),
                f64::from(self.get(r, 2)),
            ]
        };
        let dot = |a: [f64; 3], b: [f64; 3]| a[0] * b[0] + a[1] * b[1] + a[2] * b[2];

        for i in 0..3 {
            for j in i..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                if (dot(row(i), row(j)) - expected).abs() > tolerance {
                    return false;
                }
            }
        }

        true
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; MATRIX_LEN]> for RotationMatrix {
    fn from(elements: [f32; MATRIX_LEN]) -> Self {
        Self::from_array(elements)
    }
}

impl TryFrom<&[f32]> for RotationMatrix {
    type Error = RotationError;

    fn try_from(values: &[f32]) -> RotationResult<Self> {
        Self::from_slice(values)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(col < ROW_STRIDE, "column index {col} out of range");
        &self.elements[row * ROW_STRIDE + col]
    }
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix:")?;
        for r in 0..3 {
            writeln!(
                f,
                "  [{:10.6} {:10.6} {:10.6}]",
                self.get(r, 0),
                self.get(r, 1),
                self.get(r, 2)
            )?;
        }
        Ok(())
    }
}
