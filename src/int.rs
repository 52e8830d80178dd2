use std::fmt::{Debug, Display};

use num_integer::Integer;
use num_traits::{PrimInt, WrappingMul};

use crate::masks::MaskInt;

/// Fixed-width integers the rounding primitives are defined for.
///
/// Signed implementors rely on `>>` being an arithmetic shift, which Rust
/// guarantees for its signed primitives.
pub trait RoundInt: PrimInt + Integer + WrappingMul + Debug + Display {
    const BITS: u32;
    const SIGNED: bool;
    /// Largest shift with a meaningful rounded result: `BITS - 1` for
    /// unsigned types, `BITS - 2` for signed ones.
    const MAX_SHIFT: u8;
    /// Same-width unsigned type the bit masks are expressed in.
    type Unsigned: MaskInt + Debug;
    /// Twice as wide as `Self`, holds any product of two `Self` values.
    type Double: PrimInt + From<Self> + TryInto<Self>;

    /// Reinterprets the two's complement bits as `Self::Unsigned`.
    fn to_bits(self) -> Self::Unsigned;

    /// Absolute value as `Self::Unsigned`; exact even for `MIN`.
    fn magnitude(self) -> Self::Unsigned;

    #[inline]
    fn mul_wide(x: Self, y: Self) -> Self::Double {
        Self::Double::from(x) * Self::Double::from(y)
    }

    /// `0` or `1` as `Self`.
    #[inline]
    fn from_bool(b: bool) -> Self {
        if b {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

macro_rules! impl_round_int {
    (signed: $t:ty, $u:ty, $d:ty) => {
        impl RoundInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = true;
            const MAX_SHIFT: u8 = <$t>::BITS as u8 - 2;
            type Unsigned = $u;
            type Double = $d;

            #[inline]
            fn to_bits(self) -> $u {
                self as $u
            }

            #[inline]
            fn magnitude(self) -> $u {
                self.unsigned_abs()
            }
        }
    };
    (unsigned: $t:ty, $d:ty) => {
        impl RoundInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = false;
            const MAX_SHIFT: u8 = <$t>::BITS as u8 - 1;
            type Unsigned = $t;
            type Double = $d;

            #[inline]
            fn to_bits(self) -> $t {
                self
            }

            #[inline]
            fn magnitude(self) -> $t {
                self
            }
        }
    };
}

impl_round_int!(signed: i8, u8, i16);
impl_round_int!(signed: i16, u16, i32);
impl_round_int!(signed: i32, u32, i64);
impl_round_int!(signed: i64, u64, i128);
impl_round_int!(unsigned: u8, u16);
impl_round_int!(unsigned: u16, u32);
impl_round_int!(unsigned: u32, u64);
impl_round_int!(unsigned: u64, u128);
