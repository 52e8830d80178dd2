//! Masks isolating the bits a rounding shift drops.
//!
//! For a shift `S`, the low mask has the `S` lowest bits set (`2^S - 1`) and
//! the half bit is its topmost bit (`1 << (S - 1)`), the value worth exactly
//! one half of `2^S`. Shift 0 drops nothing, so both masks are 0.
//!
//! Two strategies supply the low mask for a runtime shift: a table built at
//! compile time per width, or a left shift computed on demand. They agree for
//! every valid shift; the `mask-table` feature selects which one the runtime
//! rounding paths use.

use num_traits::{PrimInt, Unsigned};

/// Unsigned bit patterns the rounding masks are expressed in.
pub trait MaskInt: PrimInt + Unsigned + 'static {
    /// `LOW_MASKS[k]` is `2^(k + 1) - 1`, for k in `0..BITS - 1`.
    const LOW_MASKS: &'static [Self];
}

macro_rules! low_mask_table {
    ($t:ty, $name:ident) => {
        const $name: [$t; <$t>::BITS as usize - 1] = {
            let mut table = [0; <$t>::BITS as usize - 1];
            let mut k = 0;
            while k < table.len() {
                table[k] = (1 << (k + 1)) - 1;
                k += 1;
            }
            table
        };

        impl MaskInt for $t {
            const LOW_MASKS: &'static [Self] = &$name;
        }
    };
}

low_mask_table!(u8, LOW_MASKS_8);
low_mask_table!(u16, LOW_MASKS_16);
low_mask_table!(u32, LOW_MASKS_32);
low_mask_table!(u64, LOW_MASKS_64);

/// Low mask for `shift`, read from the per-width table.
///
/// # Panics
///
/// Panics if `shift` is not below the bit width of `U`.
#[inline]
pub fn table_mask<U: MaskInt>(shift: u8) -> U {
    match shift {
        0 => U::zero(),
        s => U::LOW_MASKS[s as usize - 1],
    }
}

/// Low mask for `shift`, computed as `(1 << shift) - 1`.
///
/// `shift` must be below the bit width of `U`.
#[inline]
pub fn computed_mask<U: MaskInt>(shift: u8) -> U {
    debug_assert!((shift as usize) < U::LOW_MASKS.len() + 1);
    (U::one() << shift as usize) - U::one()
}

/// Low mask for `shift` from whichever strategy the build selected.
#[inline]
pub fn low_mask<U: MaskInt>(shift: u8) -> U {
    if cfg!(feature = "mask-table") {
        table_mask(shift)
    } else {
        computed_mask(shift)
    }
}

/// Topmost bit of a low mask, i.e. the half bit of its shift.
#[inline]
pub fn half_of<U: MaskInt>(low: U) -> U {
    low ^ (low >> 1)
}

/// Half bit for `shift`, `1 << (shift - 1)`, or 0 for shift 0.
#[inline]
pub fn half_bit<U: MaskInt>(shift: u8) -> U {
    half_of(low_mask::<U>(shift))
}
