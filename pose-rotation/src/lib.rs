//! Rotation parameters from tracker pose matrices.
//!
//! Camera and target poses arrive as flat 4x4 single-precision matrices. This
//! crate reads the 3x3 rotation block of such a matrix and reports it as an
//! axis-angle pair or as one of two Euler-angle triples, handling the 0° and
//! 180° singularities of the axis-angle extraction explicitly.
//!
//! - [`to_axis_angle`]: single angle about a single axis
//! - [`to_xyz_angle`], [`to_zyx_angle`]: Euler angles for the X→Y→Z and Z→Y→X orders
//! - [`simplify_angle_rad`]: fold an angle into `[-π/2, π/2]`
//!
//! All of them are pure, total and allocation-free, safe to call from any
//! thread or from a render loop. Results are in radians; unit conversion is
//! left to the caller.
//!
//! ```
//! use pose_rotation::{to_axis_angle, to_xyz_angle, RotationMatrix};
//!
//! let pose = RotationMatrix::identity().with_translation([0.0, 0.0, -2.5]);
//!
//! let aa = to_axis_angle(&pose);
//! assert_eq!(aa.angle, 0.0);
//!
//! let euler = to_xyz_angle(&pose);
//! assert_eq!(euler.to_array(), [0.0, 0.0, 0.0]);
//! ```

pub mod angle;
pub mod constants;
pub mod decompose;
pub mod errors;
mod math;
pub mod matrix;

pub use angle::simplify_angle_rad;
pub use decompose::{
    to_axis_angle, to_xyz_angle, to_zyx_angle, AxisAngle, EulerAngles, EulerOrder, PivotAxis,
};
pub use errors::{RotationError, RotationResult};
pub use matrix::RotationMatrix;
