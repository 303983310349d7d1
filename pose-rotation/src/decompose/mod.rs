//! Extraction of rotation parameters from a [`RotationMatrix`](crate::RotationMatrix).
//!
//! Every function here is pure and allocation-free: it reads nine floats and
//! returns a small `Copy` value. They never fail; the only guards are the ones
//! that keep single-precision noise from turning into NaN.

pub mod axis_angle;
pub mod euler;

pub use axis_angle::{to_axis_angle, AxisAngle, PivotAxis};
pub use euler::{to_xyz_angle, to_zyx_angle, EulerAngles, EulerOrder};
