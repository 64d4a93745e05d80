//! Fixed-point FIR derivative over the most recent window taps.
//!
//! The kernel is a Savitzky–Golay first-derivative coefficient set (order 1,
//! length 15) pre-scaled into Q15 fixed point: `w[k] = 32768 * c[k] / 280`.
//! Integer division truncates toward zero, so the positive and negative
//! halves of the table stay exact mirrors and a constant window sums to
//! exactly zero.

use crate::util::saturate_i16;
use crate::window::Sample;

/// Number of taps that participate in the convolution.
pub const KERNEL_LEN: usize = 15;

/// Fixed-point scale of the accumulator. Physical slope in
/// distance-units per second is `accumulator / (FIR_SCALE * dt_s)`.
pub const FIR_SCALE: i64 = 32768;

/// Savitzky–Golay O1/L15 first-derivative kernel, Q15 over normalizer 280.
/// `w[0]` weights the newest sample, so a rising distance yields a positive
/// accumulator.
pub const SAVGOL_DERIV: [i64; KERNEL_LEN] = [
    32768 * 7 / 280,
    32768 * 6 / 280,
    32768 * 5 / 280,
    32768 * 4 / 280,
    32768 * 3 / 280,
    32768 * 2 / 280,
    32768 / 280,
    0,
    32768 * -1 / 280,
    32768 * -2 / 280,
    32768 * -3 / 280,
    32768 * -4 / 280,
    32768 * -5 / 280,
    32768 * -6 / 280,
    32768 * -7 / 280,
];

/// Convolve the most recent `KERNEL_LEN` taps of `window` with the kernel
/// and return the raw fixed-point accumulator.
///
/// Requires `window.len() >= KERNEL_LEN`; older taps do not participate.
/// Returns 0 on a shorter window (the caller's config is validated against
/// this at build time).
pub fn apply(window: &[Sample]) -> i64 {
    if window.len() < KERNEL_LEN {
        return 0;
    }
    let taps = &window[window.len() - KERNEL_LEN..];
    taps.iter()
        .rev()
        .zip(SAVGOL_DERIV.iter())
        .map(|(&x, &w)| i64::from(x) * w)
        .sum()
}

/// Normalize the raw accumulator into the signed 16-bit wire field
/// (distance tenths per second), saturating at the field bounds.
#[inline]
pub fn slope_from_accum(accum: i64) -> i16 {
    saturate_i16(accum / FIR_SCALE)
}
