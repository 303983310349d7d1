//! Error type for the construction boundary of the crate.
//!
//! The decomposition functions themselves are total: any finite buffer yields a
//! result, so they return plain values. The only fallible step is turning a
//! caller-provided slice into a [`RotationMatrix`](crate::RotationMatrix),
//! where the length is not known at compile time.
//!
//! ```
//! use pose_rotation::{RotationError, RotationMatrix};
//!
//! let short = [0.0_f32; 9];
//! match RotationMatrix::from_slice(&short) {
//!     Err(RotationError::InvalidLength { expected, actual }) => {
//!         assert_eq!(expected, 16);
//!         assert_eq!(actual, 9);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Failure to build a rotation matrix view from caller data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    /// The flat buffer does not hold a 4x4 matrix.
    #[error("Invalid matrix length: expected {expected} elements, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Convenience alias for `Result<T, RotationError>`.
pub type RotationResult<T> = Result<T, RotationError>;

impl RotationError {
    /// Creates an [`InvalidLength`](Self::InvalidLength) error.
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }
}
