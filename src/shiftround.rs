//! `ROUND(num / 2^shift)` without dividing.
//!
//! The truncated quotient is a plain right shift. For unsigned values, and for
//! signed values that are not negative, it already truncates toward zero and
//! the half bit alone tells whether the dropped fraction reaches one half.
//!
//! For negative values the arithmetic shift truncates toward negative
//! infinity. At an exact half that already is the away-from-zero answer
//! (-2.5 floors to -3), so the correction only applies when the dropped bits
//! are strictly above the half bit pattern. With shift 1 the only possible
//! fractions are 0 and exactly one half, so negative values never correct.

use std::marker::PhantomData;
use std::ops::Div;

use num_traits::{One, Zero};

use crate::error::RoundError;
use crate::int::RoundInt;
use crate::masks;

/// Applies the rounding correction to `num >> shift`.
///
/// `low` must be the low mask of `shift` (see [`masks`]); that keeps this the
/// single decision routine shared by the runtime and compile-time shifts.
#[inline(always)]
pub(crate) fn round_shifted<T: RoundInt>(num: T, shift: u8, low: T::Unsigned) -> T {
    let half = masks::half_of(low);
    let bits = num.to_bits();
    let truncated = num >> shift as usize;
    let half_set = !(bits & half).is_zero();
    let above_half = (bits & low) != half;
    let round_up = half_set && (!T::SIGNED || num >= T::zero() || above_half);
    truncated + T::from_bool(round_up)
}

/// Reports a shift the saturating entry points replace with 0.
#[inline]
pub(crate) fn reject_shift<T: RoundInt>(function: &str, inputs: std::fmt::Arguments<'_>, shift: u8) {
    if cfg!(feature = "diagnostics") {
        log::warn!(
            "{}({}): shift {} is out of range 0..={} for {}-bit {}, returning 0",
            function,
            inputs,
            shift,
            T::MAX_SHIFT,
            T::BITS,
            if T::SIGNED { "signed" } else { "unsigned" },
        );
    }
}

#[inline]
pub(crate) fn check_shift<T: RoundInt>(shift: u8) -> Result<(), RoundError> {
    if shift > T::MAX_SHIFT {
        Err(RoundError::InvalidShift {
            shift,
            max: T::MAX_SHIFT,
        })
    } else {
        Ok(())
    }
}

/// Rounds `num / 2^shift` half away from zero (half up for unsigned types).
///
/// A shift above `T::MAX_SHIFT` returns 0.
///
/// ```
/// use shiftround::shiftround;
///
/// assert_eq!(shiftround(5i8, 1), 3);
/// assert_eq!(shiftround(-5i8, 1), -3);
/// assert_eq!(shiftround(-16i8, 7), 0);
/// ```
#[inline]
pub fn shiftround<T: RoundInt>(num: T, shift: u8) -> T {
    if shift > T::MAX_SHIFT {
        reject_shift::<T>("shiftround", format_args!("{}", num), shift);
        return T::zero();
    }
    round_shifted(num, shift, masks::low_mask(shift))
}

/// [`shiftround`] with the shift fixed at compile time.
///
/// A `SHIFT` above `T::MAX_SHIFT` fails to compile.
///
/// ```
/// use shiftround::shiftround_const;
///
/// assert_eq!(shiftround_const::<4, i32>(-40), -3);
/// ```
///
/// `i8` shifts stop at 6:
///
/// ```compile_fail
/// shiftround::shiftround_const::<7, i8>(-16);
/// ```
#[inline]
pub fn shiftround_const<const SHIFT: u8, T: RoundInt>(num: T) -> T {
    const {
        assert!(SHIFT <= T::MAX_SHIFT, "shift exceeds the maximum for this type");
    }
    let low = (T::Unsigned::one() << SHIFT as usize) - T::Unsigned::one();
    round_shifted(num, SHIFT, low)
}

/// [`shiftround`] that reports an out-of-range shift instead of returning 0.
#[inline]
pub fn checked_shiftround<T: RoundInt>(num: T, shift: u8) -> Result<T, RoundError> {
    check_shift::<T>(shift)?;
    Ok(round_shifted(num, shift, masks::low_mask(shift)))
}

/// A validated power of two divisor with its masks computed once.
///
/// Dividing by `&RoundShift` rounds like [`shiftround`]:
///
/// ```
/// use shiftround::RoundShift;
///
/// let sixteenth = RoundShift::<i16>::new(4).unwrap();
/// assert_eq!(300i16 / &sixteenth, 19);
/// assert_eq!(-24i16 / &sixteenth, -2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundShift<T: RoundInt> {
    low: T::Unsigned,
    shift: u8,
    _marker: PhantomData<T>,
}

impl<T: RoundInt> RoundShift<T> {
    pub fn new(shift: u8) -> Result<Self, RoundError> {
        check_shift::<T>(shift)?;
        Ok(RoundShift {
            low: masks::low_mask(shift),
            shift,
            _marker: PhantomData,
        })
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    /// The divisor `2^shift`, as `T::Unsigned`.
    pub fn divisor(&self) -> T::Unsigned {
        self.low + T::Unsigned::one()
    }

    #[inline]
    pub fn round(&self, num: T) -> T {
        round_shifted(num, self.shift, self.low)
    }
}

macro_rules! impl_div_round_shift {
    ($($t:ty),*) => {$(
        impl Div<&RoundShift<Self>> for $t {
            type Output = Self;

            #[inline]
            fn div(self, denom: &RoundShift<Self>) -> Self::Output {
                denom.round(self)
            }
        }
    )*};
}

impl_div_round_shift!(i8, i16, i32, i64, u8, u16, u32, u64);
