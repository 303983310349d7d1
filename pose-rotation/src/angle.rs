//! Angle folding for displayed rotation components.
//!
//! [`simplify_angle_rad`] is **not** a wrap. It folds the real line onto
//! `[-π/2, +π/2]` with a triangle wave:
//!
//! | Input | Output |
//! |-------|--------|
//! | `0` | `0` |
//! | `π/4` | `π/4` |
//! | `π/2` | `π/2` |
//! | `3π/4` | `π/4` |
//! | `π` | `0` |
//! | `3π/2` | `-π/2` |
//! | `2π` | `0` |
//!
//! Inputs beyond ±90° are reflected back towards zero rather than shifted by a
//! full turn, so `π` and `0` map to the same value. Downstream consumers rely
//! on this shape; do not replace it with a `[-π, π)` wrap.
//!
//! # Example
//!
//! ```
//! use pose_rotation::simplify_angle_rad;
//! use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
//!
//! assert!((simplify_angle_rad(3.0 * FRAC_PI_4) - FRAC_PI_4).abs() < 1e-6);
//! assert!(simplify_angle_rad(PI).abs() < 1e-6);
//! assert!((simplify_angle_rad(3.0 * FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
//! ```

use crate::math::{asin, sin};

/// Folds `angle` through `asin(sin(angle))` into `[-π/2, +π/2]`.
#[inline]
pub fn simplify_angle_rad(angle: f32) -> f32 {
    asin(sin(f64::from(angle))) as f32
}
