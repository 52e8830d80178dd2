//! `ROUND(num * mul / 2^shift)` without dividing.
//!
//! The product is formed with the type's wrapping multiply and then rounded
//! exactly like [`shiftround`](crate::shiftround()). The low bits of a
//! wrapped product equal those of the true product, but the result is only
//! meaningful when the true product fits in `T`; that is the caller's
//! responsibility unless they use [`checked_multshiftround`].

use num_traits::{One, Zero};

use crate::error::RoundError;
use crate::int::RoundInt;
use crate::masks;
use crate::shiftround::{check_shift, reject_shift, round_shifted};

/// Exact product of `num` and `mul`, or which bound of `T` it crosses.
#[inline]
fn exact_product<T: RoundInt>(num: T, mul: T) -> Result<T, RoundError> {
    let wide = T::mul_wide(num, mul);
    TryInto::<T>::try_into(wide).map_err(|_| {
        if wide < T::Double::zero() {
            RoundError::ProductUnderflow
        } else {
            RoundError::ProductOverflow
        }
    })
}

#[inline]
fn report_overflow<T: RoundInt>(num: T, mul: T, shift: u8) {
    if cfg!(feature = "diagnostics") {
        if let Err(err) = exact_product(num, mul) {
            log::warn!(
                "multshiftround({}, {}, {}): {}, result is unreliable",
                num,
                mul,
                shift,
                err
            );
        }
    }
}

/// Rounds `num * mul / 2^shift` half away from zero (half up for unsigned
/// types).
///
/// A shift above `T::MAX_SHIFT` returns 0. An overflowing product is rounded
/// as wrapped.
///
/// ```
/// use shiftround::multshiftround;
///
/// assert_eq!(multshiftround(100i16, 3, 4), 19);
/// assert_eq!(multshiftround(-100i16, 3, 4), -19);
/// ```
#[inline]
pub fn multshiftround<T: RoundInt>(num: T, mul: T, shift: u8) -> T {
    if shift > T::MAX_SHIFT {
        reject_shift::<T>("multshiftround", format_args!("{}, {}", num, mul), shift);
        return T::zero();
    }
    report_overflow(num, mul, shift);
    round_shifted(num.wrapping_mul(&mul), shift, masks::low_mask(shift))
}

/// [`multshiftround`] with the shift fixed at compile time.
///
/// A `SHIFT` above `T::MAX_SHIFT` fails to compile.
///
/// ```
/// use shiftround::multshiftround_const;
///
/// assert_eq!(multshiftround_const::<31, u32>(1 << 20, 1 << 10), 1);
/// ```
///
/// ```compile_fail
/// shiftround::multshiftround_const::<32, u32>(1, 1);
/// ```
#[inline]
pub fn multshiftround_const<const SHIFT: u8, T: RoundInt>(num: T, mul: T) -> T {
    const {
        assert!(SHIFT <= T::MAX_SHIFT, "shift exceeds the maximum for this type");
    }
    report_overflow(num, mul, SHIFT);
    let low = (T::Unsigned::one() << SHIFT as usize) - T::Unsigned::one();
    round_shifted(num.wrapping_mul(&mul), SHIFT, low)
}

/// [`multshiftround`] that reports an out-of-range shift or a product that
/// does not fit in `T`.
///
/// ```
/// use shiftround::{checked_multshiftround, RoundError};
///
/// assert_eq!(checked_multshiftround(100i8, 2, 3), Err(RoundError::ProductOverflow));
/// assert_eq!(checked_multshiftround(-100i8, 2, 3), Err(RoundError::ProductUnderflow));
/// assert_eq!(checked_multshiftround(60i8, 2, 3), Ok(15));
/// ```
#[inline]
pub fn checked_multshiftround<T: RoundInt>(num: T, mul: T, shift: u8) -> Result<T, RoundError> {
    check_shift::<T>(shift)?;
    let product = exact_product(num, mul)?;
    Ok(round_shifted(product, shift, masks::low_mask(shift)))
}
