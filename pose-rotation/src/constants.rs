/// Off-diagonal symmetry tolerance: below this the skew-symmetric part is
/// treated as zero and the rotation as 0° or 180°.
pub const SYMMETRY_EPSILON: f32 = 0.01;

/// Tolerance separating the identity (0°) from a half turn (180°).
pub const IDENTITY_EPSILON: f32 = 0.1;

/// Floor for the skew-symmetric norm in the general axis-angle branch.
pub const MIN_SKEW_NORM: f32 = 0.001;

/// Axis component used on both non-pivot axes when the 180° pivot collapses.
#[allow(clippy::approx_constant)]
pub const FALLBACK_AXIS_COMPONENT: f32 = 0.7071;

/// Number of elements in a flat 4x4 pose matrix.
pub const MATRIX_LEN: usize = 16;

/// Row stride of the flat 4x4 layout.
pub const ROW_STRIDE: usize = 4;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;
