/* embtrig | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* CORDIC sine / cosine computation */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#[warn(missing_docs)]

/******************************************************************************/

mod decompose;
mod rotate;

pub use decompose::{decompose, Op, OpSequence};
pub use rotate::{accumulate, right_shift, TrigValue};

include!(concat!(env!("OUT_DIR"), "/cordic_tables.rs"));

/******************************************************************************/

/// Number of elementary angles in the precomputed rotation tables
pub const TABLE_DEPTH: usize = 20;

/******************************************************************************/

/// Computes the cosine and sine of an angle
///
/// The angle is expressed in radians and must be in the [0, π/2] range; see [`decompose()`].
/// For example:
/// ```
/// let v = embtrig::sin_cos(core::f64::consts::FRAC_PI_3);
/// assert!((v.cosine - 0.5).abs() < 1e-4);
/// ```
pub fn sin_cos(alpha: f64) -> TrigValue {
    accumulate(&decompose(alpha))
}

/// Computes the sine of an angle in the [0, π/2] range
pub fn sin(alpha: f64) -> f64 {
    sin_cos(alpha).sine
}

/// Computes the cosine of an angle in the [0, π/2] range
pub fn cos(alpha: f64) -> f64 {
    sin_cos(alpha).cosine
}

/******************************************************************************/
