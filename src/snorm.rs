//! Conversions between signed normalized fixed-point values and floats.
//!
//! OpenGL 3.3 defines two signed normalization conventions and this module
//! implements both as submodules:
//!
//! - [`without_zero`]: the full two's-complement range is used, so `-1.0`
//!   maps to `-2^(b-1)` and `+1.0` to `2^(b-1) - 1`, but `0.0` has no exact
//!   encoding (equation 2.2 of the GL 3.3 spec).
//! - [`with_zero`]: `0.0` maps exactly to `0` and `±1.0` to `±(2^(b-1) - 1)`,
//!   leaving `-2^(b-1)` as an unused encoding (equation 2.3).
//!
//! Functions are named input-to-output, e.g. `i32_to_f32` decodes a 32-bit
//! fixed-point value into an `f32` and `f32_to_i32` encodes the reverse
//! direction. Every function takes the bit precision `b` as its second
//! argument: `2..=32` for `i32` containers, `2..=64` for `i64` containers.
//!
//! None of these functions validate their input in release builds. An `x`
//! outside `[-1, 1]` or an `f` outside the representable range for `b`
//! produces whatever the arithmetic and the saturating float-to-int cast
//! yield. The one exception is the `max(-1.0, _)` clamp on the
//! [`with_zero`] decode path, which is part of the encoding's contract.

/// The signed representation in which zero is not exactly representable.
///
/// `-1.0` decodes from `-2^(b-1)` and `+1.0` from `2^(b-1) - 1`; every
/// encoded value `f` decodes to `(2*f + 1) / (2^b - 1)`.
pub mod without_zero {
    // One template for all four (container, float) combinations so the
    // formula cannot drift between widths.
    macro_rules! codec {
        ($int:ty, $float:ty, $decode:ident, $encode:ident, $max:ident, $max_bits:literal) => {
            #[inline(always)]
            pub fn $decode(f: $int, bits: u32) -> $float {
                debug_assert!(bits >= 2 && bits <= $max_bits);
                let scale = crate::scale::$max(bits);
                (2.0 * f as $float + 1.0) / scale
            }
            #[inline(always)]
            pub fn $encode(x: $float, bits: u32) -> $int {
                debug_assert!(bits >= 2 && bits <= $max_bits);
                debug_assert!((-1.0..=1.0).contains(&x));
                let scale = crate::scale::$max(bits);
                ((x * scale - 1.0) / 2.0) as $int
            }
        };
    }

    codec!(i32, f32, i32_to_f32, f32_to_i32, max_f32, 32);
    codec!(i32, f64, i32_to_f64, f64_to_i32, max_f64, 32);
    codec!(i64, f32, i64_to_f32, f32_to_i64, max_f32, 64);
    codec!(i64, f64, i64_to_f64, f64_to_i64, max_f64, 64);
}

/// The signed representation in which zero is exact.
///
/// `0.0` decodes from `0` and `±1.0` from `±(2^(b-1) - 1)`. The encoding
/// `-2^(b-1)` is outside the nominal range; decoding clamps it (and anything
/// below `-1.0`) up to `-1.0`.
pub mod with_zero {
    macro_rules! codec {
        ($int:ty, $float:ty, $decode:ident, $encode:ident, $max:ident, $max_bits:literal) => {
            #[inline(always)]
            pub fn $decode(f: $int, bits: u32) -> $float {
                debug_assert!(bits >= 2 && bits <= $max_bits);
                let scale = crate::scale::$max(bits - 1);
                // The clamp is deliberate: it maps the unused -2^(b-1)
                // encoding (and any out-of-range f) to exactly -1.0.
                (f as $float / scale).max(-1.0)
            }
            #[inline(always)]
            pub fn $encode(x: $float, bits: u32) -> $int {
                debug_assert!(bits >= 2 && bits <= $max_bits);
                debug_assert!((-1.0..=1.0).contains(&x));
                let scale = crate::scale::$max(bits - 1);
                (x * scale) as $int
            }
        };
    }

    codec!(i32, f32, i32_to_f32, f32_to_i32, max_f32, 32);
    codec!(i32, f64, i32_to_f64, f64_to_i32, max_f64, 32);
    codec!(i64, f32, i64_to_f32, f32_to_i64, max_f32, 64);
    codec!(i64, f64, i64_to_f64, f64_to_i64, max_f64, 64);
}
