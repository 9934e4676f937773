// SPDX-License-Identifier: MPL-2.0
//! Test helpers.
//!
//! Re-exports the `approx` assertion macros; player times, volumes and
//! ratios are `f64` and rarely compare exactly after arithmetic.

pub use approx::assert_abs_diff_eq;
