//! Conversions between unsigned normalized fixed-point values and floats.
//!
//! `0.0` maps to `0` and `1.0` to `2^b - 1` (equation 2.1 of the GL 3.3
//! spec). The containers are `u32` and `u64`, so a 32-bit value uses the
//! full `[0, 2^32 - 1]` range. Precision `b` is `2..=32` for `u32` and
//! `2..=64` for `u64`.
//!
//! As with the signed modules, nothing is validated in release builds; the
//! float-to-int cast truncates toward zero and saturates at the container
//! bounds.

macro_rules! codec {
    ($int:ty, $float:ty, $decode:ident, $encode:ident, $max:ident, $max_bits:literal) => {
        #[inline(always)]
        pub fn $decode(f: $int, bits: u32) -> $float {
            debug_assert!(bits >= 2 && bits <= $max_bits);
            let scale = crate::scale::$max(bits);
            f as $float / scale
        }
        #[inline(always)]
        pub fn $encode(x: $float, bits: u32) -> $int {
            debug_assert!(bits >= 2 && bits <= $max_bits);
            debug_assert!((0.0..=1.0).contains(&x));
            let scale = crate::scale::$max(bits);
            (x * scale) as $int
        }
    };
}

codec!(u32, f32, u32_to_f32, f32_to_u32, max_f32, 32);
codec!(u32, f64, u32_to_f64, f64_to_u32, max_f64, 32);
codec!(u64, f32, u64_to_f32, f32_to_u64, max_f32, 64);
codec!(u64, f64, u64_to_f64, f64_to_u64, max_f64, 64);
