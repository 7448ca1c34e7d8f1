// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Gesture offsets and card poses are `f32` math, so tests compare them with
//! the `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
