//! Exact rounding for fixed-point integer arithmetic.
//!
//! [`shiftround`] computes `ROUND(num / 2^shift)`, [`multshiftround`]
//! computes `ROUND(num * mul / 2^shift)` and [`divround`] computes
//! `ROUND(dividend / divisor)`. Signed results round half away from zero and
//! unsigned results round half up, matching the exact rational value.
//! The power of two forms use shifts, masks and comparisons only.
//!
//! Every function is defined for `i8`..`i64` and `u8`..`u64` through
//! [`RoundInt`]. Shifts come in three flavors that share one decision routine:
//!
//! * a runtime shift (`shiftround(num, shift)`), which returns 0 when the
//!   shift is above [`RoundInt::MAX_SHIFT`];
//! * a compile-time shift (`shiftround_const::<SHIFT, _>(num)`), which
//!   refuses to compile for such a shift;
//! * a pre-validated [`RoundShift`] that divides with `/`.
//!
//! The `checked_*` variants return [`RoundError`] where the default functions
//! substitute sentinel values.
//!
//! ```
//! use shiftround::{divround_i32, multshiftround_i16, shiftround_i8, shiftround_u8};
//!
//! assert_eq!(shiftround_i8(5, 1), 3);
//! assert_eq!(shiftround_i8(-5, 1), -3);
//! assert_eq!(shiftround_u8(5, 1), 3);
//! assert_eq!(multshiftround_i16(100, 3, 4), 19);
//! assert_eq!(divround_i32(7, 2), 4);
//! ```
//!
//! # Features
//!
//! * `diagnostics`: logs out-of-range shifts and overflowing products through
//!   [`log`]. Results are unchanged.
//! * `mask-table`: runtime shifts read their masks from tables built at
//!   compile time instead of shifting.

mod divround;
mod error;
mod int;
pub mod masks;
mod multshiftround;
mod shiftround;

pub use crate::divround::{checked_divround, divround};
pub use crate::error::RoundError;
pub use crate::int::RoundInt;
pub use crate::multshiftround::{checked_multshiftround, multshiftround, multshiftround_const};
pub use crate::shiftround::{checked_shiftround, shiftround, shiftround_const, RoundShift};

macro_rules! per_type_fns {
    ($($t:ty => $shiftround:ident, $multshiftround:ident, $divround:ident;)*) => {$(
        #[doc = concat!("[`shiftround`] for `", stringify!($t), "`.")]
        #[inline]
        pub fn $shiftround(num: $t, shift: u8) -> $t {
            shiftround(num, shift)
        }

        #[doc = concat!("[`multshiftround`] for `", stringify!($t), "`.")]
        #[inline]
        pub fn $multshiftround(num: $t, mul: $t, shift: u8) -> $t {
            multshiftround(num, mul, shift)
        }

        #[doc = concat!("[`divround`] for `", stringify!($t), "`.")]
        #[inline]
        pub fn $divround(dividend: $t, divisor: $t) -> $t {
            divround(dividend, divisor)
        }
    )*};
}

per_type_fns! {
    i8 => shiftround_i8, multshiftround_i8, divround_i8;
    i16 => shiftround_i16, multshiftround_i16, divround_i16;
    i32 => shiftround_i32, multshiftround_i32, divround_i32;
    i64 => shiftround_i64, multshiftround_i64, divround_i64;
    u8 => shiftround_u8, multshiftround_u8, divround_u8;
    u16 => shiftround_u16, multshiftround_u16, divround_u16;
    u32 => shiftround_u32, multshiftround_u32, divround_u32;
    u64 => shiftround_u64, multshiftround_u64, divround_u64;
}
