#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

/// `asin` with the argument clamped to `[-1, 1]`.
///
/// Single-precision matrix entries of a unit rotation can land a rounding step
/// outside the domain; without the clamp that produces NaN.
#[inline]
pub fn asin_clamped(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0))
}

/// `acos` with the argument clamped to `[-1, 1]`.
#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    libm::acos(x.clamp(-1.0, 1.0))
}

#[inline]
pub fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[inline]
pub fn asin(x: f64) -> f64 {
    libm::asin(x)
}
