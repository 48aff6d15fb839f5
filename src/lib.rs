//! Conversions between normalized fixed-point integers and floating-point
//! values, following the conventions of the OpenGL 3.3 specification
//! (section 2.1.5, "Fixed-Point Data Conversions").
//!
//! A normalized fixed-point value is an integer that, after a fixed linear
//! scaling, represents a real number in `[-1, 1]` (signed) or `[0, 1]`
//! (unsigned). This crate implements all three encodings the GL spec
//! defines, for 32- and 64-bit integer containers and both float widths:
//!
//! - [`snorm::without_zero`]: signed, the full two's-complement range is
//!   used and zero is not exactly representable.
//! - [`snorm::with_zero`]: signed, zero is exact at the cost of one unused
//!   negative encoding.
//! - [`unorm`]: unsigned.
//!
//! Every conversion is a pure function of its arguments plus the bit
//! precision `b`, valid from 2 up to the container width. There is no
//! validation: out-of-range inputs produce whatever the arithmetic and
//! Rust's saturating float-to-int casts yield (debug builds assert the
//! documented domains).
//!
//! ```
//! use glnorm::{snorm, unorm};
//!
//! // 8-bit signed, zero-exact ("with zero") encoding
//! assert_eq!(snorm::with_zero::i32_to_f32(127, 8), 1.0);
//! assert_eq!(snorm::with_zero::i32_to_f32(0, 8), 0.0);
//! assert_eq!(snorm::with_zero::i32_to_f32(-127, 8), -1.0);
//! // the unused -128 encoding is clamped
//! assert_eq!(snorm::with_zero::i32_to_f32(-128, 8), -1.0);
//!
//! // 8-bit unsigned
//! assert_eq!(unorm::u32_to_f32(255, 8), 1.0);
//! assert_eq!(unorm::f32_to_u32(1.0, 8), 255);
//! ```

#![forbid(unsafe_code)]

mod scale;

pub mod snorm;
pub mod unorm;
