/// Equivalent to `f64::abs` but suitable on `no_std`.
#[inline]
pub(crate) fn fabs(x: f64) -> f64 {
    libm::fabs(x)
}

/// Equivalent to `f64::rem` (the `%` operator) but suitable on `no_std`.
#[inline]
pub(crate) fn fmod(x: f64, m: f64) -> f64 {
    libm::fmod(x, m)
}
