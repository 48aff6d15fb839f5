//! Precomputed scale constants.
//!
//! `MAX_*[k]` is `2^k - 1` expressed in the target float type, for `k` in
//! `1..=64`. The conversion functions only ever need these two families of
//! divisors, so they are const-evaluated once instead of recomputing a
//! power per call.

const MAX_F32: [f32; 65] = max_f32_table();
const MAX_F64: [f64; 65] = max_f64_table();

const fn max_f32_table() -> [f32; 65] {
    let mut table = [0.0; 65];
    let mut k = 1;
    while k < 65 {
        table[k] = (u128::MAX >> (128 - k)) as f32;
        k += 1;
    }
    table
}
const fn max_f64_table() -> [f64; 65] {
    let mut table = [0.0; 65];
    let mut k = 1;
    while k < 65 {
        table[k] = (u128::MAX >> (128 - k)) as f64;
        k += 1;
    }
    table
}

/// Returns `2^bits - 1` as an `f32`.
///
/// Out-of-range `bits` are clamped to the table so release builds stay
/// panic-free. Callers `debug_assert!` the documented range themselves.
#[inline(always)]
pub(crate) fn max_f32(bits: u32) -> f32 {
    MAX_F32[bits.min(64) as usize]
}

/// Returns `2^bits - 1` as an `f64`.
#[inline(always)]
pub(crate) fn max_f64(bits: u32) -> f64 {
    MAX_F64[bits.min(64) as usize]
}
