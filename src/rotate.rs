/* embtrig | rotate.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Shift-and-add vector rotation with final scale correction */

/******************************************************************************/

use crate::decompose::{Op, OpSequence};
use crate::COSINE_TABLE;

/******************************************************************************/

/// Cosine / sine pair produced by a rotation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrigValue {
    /// Cosine of the decomposed angle
    pub cosine: f64,
    /// Sine of the decomposed angle
    pub sine: f64
}

/******************************************************************************/

/// Scales a value by 2⁻ˢʰⁱᶠᵗ through direct exponent adjustment
///
/// The significand bits are left untouched, so this is exact for IEEE-754 values.
pub fn right_shift(value: f64, shift: i32) -> f64 {
    let (significand, exponent) = libm::frexp(value);
    libm::ldexp(significand, exponent - shift)
}

/// Rotates the unit x-axis vector through an operation sequence
///
/// Every non-skipped step stretches the vector by 1 / cos(θᵢ); the running product of cosine
/// table entries undoes the stretch once at the end.
pub fn accumulate(ops: &OpSequence) -> TrigValue {
    let mut x = 1.0;
    let mut y = 0.0;
    let mut mul = 1.0;

    for (i, op) in ops.as_slice().iter().enumerate() {
        let (x_out, y_out) = match op {
            Op::Add => (x - right_shift(y, i as i32), right_shift(x, i as i32) + y),
            Op::Sub => (x + right_shift(y, i as i32), y - right_shift(x, i as i32)),
            Op::Skip => continue
        };
        x = x_out;
        y = y_out;
        mul *= COSINE_TABLE[i];
    }

    TrigValue {
        cosine: x * mul,
        sine: y * mul
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;
    use approx::assert_ulps_eq;
    use core::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

    #[test]
    fn test_right_shift_matches_division() {
        assert_eq!(right_shift(3.0, 2), 0.75);
        assert_eq!(right_shift(1.0, 10), 1.0 / 1024.0);
        assert_eq!(right_shift(-5.5, 1), -2.75);
        assert_eq!(right_shift(0.1, 4), 0.1 / 16.0);
    }

    #[test]
    fn test_right_shift_of_zero() {
        assert_eq!(right_shift(0.0, 7), 0.0);
    }

    #[test]
    fn test_right_shift_composes() {
        for a in 0..8 {
            for b in 0..8 {
                for value in [1.0, 0.3, -2.7, 123.456] {
                    assert_eq!(right_shift(right_shift(value, a), b), right_shift(value, a + b));
                }
            }
        }
    }

    #[test]
    fn test_identity_rotation() {
        let v = accumulate(&decompose(0.0));
        assert_eq!(v.cosine, 1.0);
        assert_eq!(v.sine, 0.0);
    }

    #[test]
    fn test_single_step_rotation() {
        // A lone π/4 step lands exactly on the first cosine table entry
        let v = accumulate(&decompose(FRAC_PI_4));
        assert_ulps_eq!(v.cosine, FRAC_1_SQRT_2, max_ulps = 4);
        assert_ulps_eq!(v.sine, FRAC_1_SQRT_2, max_ulps = 4);
    }

    #[test]
    fn test_default_is_zeroed() {
        let v = TrigValue::default();
        assert_eq!(v.cosine, 0.0);
        assert_eq!(v.sine, 0.0);
    }
}
