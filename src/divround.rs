//! `ROUND(dividend / divisor)` for an arbitrary divisor.
//!
//! One native truncating division gives the quotient and remainder. The
//! remainder carries the sign of the dividend, so the quotient moves one step
//! away from zero, toward the sign of the exact result, whenever the
//! remainder's magnitude reaches half the divisor's magnitude. Both
//! magnitudes are taken in the unsigned type so `MIN` stays exact.

use num_traits::One;

use crate::error::RoundError;
use crate::int::RoundInt;

#[inline]
fn round_quotient<T: RoundInt>(dividend: T, divisor: T) -> T {
    let (quotient, remainder) = dividend.div_rem(&divisor);
    let abs_divisor = divisor.magnitude();
    // ceil(|divisor| / 2), the smallest remainder at or past the halfway point
    let half = (abs_divisor >> 1) + (abs_divisor & T::Unsigned::one());
    if remainder.magnitude() < half {
        return quotient;
    }
    // |divisor| >= 2 here, so the step cannot leave the range of T
    if (dividend < T::zero()) == (divisor < T::zero()) {
        quotient + T::one()
    } else {
        quotient - T::one()
    }
}

#[inline]
fn is_min_by_minus_one<T: RoundInt>(dividend: T, divisor: T) -> bool {
    T::SIGNED && dividend == T::min_value() && divisor == T::zero() - T::one()
}

/// Rounds `dividend / divisor` half away from zero (half up for unsigned
/// types).
///
/// Division by zero returns `dividend` unchanged, and `MIN / -1` saturates to
/// `MAX`.
///
/// ```
/// use shiftround::divround;
///
/// assert_eq!(divround(7i32, 2), 4);
/// assert_eq!(divround(-7i32, 2), -4);
/// assert_eq!(divround(-128i8, -1), 127);
/// assert_eq!(divround(42u16, 0), 42);
/// ```
#[inline]
pub fn divround<T: RoundInt>(dividend: T, divisor: T) -> T {
    if divisor.is_zero() {
        return dividend;
    }
    if is_min_by_minus_one(dividend, divisor) {
        return T::max_value();
    }
    round_quotient(dividend, divisor)
}

/// [`divround`] that reports division by zero and `MIN / -1` instead of
/// substituting a value.
#[inline]
pub fn checked_divround<T: RoundInt>(dividend: T, divisor: T) -> Result<T, RoundError> {
    if divisor.is_zero() {
        return Err(RoundError::DivideByZero);
    }
    if is_min_by_minus_one(dividend, divisor) {
        return Err(RoundError::DivideOverflow);
    }
    Ok(round_quotient(dividend, divisor))
}
