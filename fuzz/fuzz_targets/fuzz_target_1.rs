#![no_main]
use libfuzzer_sys::fuzz_target;
use shiftround::{divround, multshiftround, shiftround, RoundInt};

fn round_ratio(num: i128, den: i128) -> i128 {
    let (q, r) = (num / den, num % den);
    if 2 * r.abs() >= den.abs() {
        q + num.signum() * den.signum()
    } else {
        q
    }
}

fuzz_target!(|items: Vec<u64>| {
    if items.len() < 2 {
        return;
    }
    let shift = items[0] as u8;
    let d = items[1];
    macro_rules! run {
        ($num_type:ty) => {{
            let d = d as $num_type;
            let max_shift = <$num_type as RoundInt>::MAX_SHIFT;
            for item in items.iter() {
                let item = *item as $num_type;

                let rounded = shiftround(item, shift);
                if shift > max_shift {
                    assert_eq!(rounded, 0, "shiftround {} {} >> {}", stringify!($num_type), item, shift);
                } else {
                    let expected = round_ratio(item as i128, 1 << shift);
                    assert_eq!(rounded as i128, expected, "shiftround {} {} >> {}", stringify!($num_type), item, shift);
                }

                let product = (item as i128)
                    .checked_mul(d as i128)
                    .filter(|p| (<$num_type>::MIN as i128..=<$num_type>::MAX as i128).contains(p));
                if let (Some(product), true) = (product, shift <= max_shift) {
                    let expected = round_ratio(product, 1 << shift);
                    assert_eq!(multshiftround(item, d, shift) as i128, expected, "multshiftround {} {} * {} >> {}", stringify!($num_type), item, d, shift);
                }

                let expected = if d == 0 {
                    item as i128
                } else {
                    round_ratio(item as i128, d as i128).min(<$num_type>::MAX as i128)
                };
                assert_eq!(divround(item, d) as i128, expected, "divround {} {} / {}", stringify!($num_type), item, d);
            }
        }}
    }
    run!(i64);
    run!(u64);
    run!(i32);
    run!(u32);
    run!(i16);
    run!(u16);
    run!(i8);
    run!(u8);
});
