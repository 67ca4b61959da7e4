/* embtrig | decompose.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Greedy decomposition of an angle into elementary rotations */

/******************************************************************************/

use crate::{TABLE_DEPTH, THETA_TABLE};

/// Convergence tolerance for the greedy search
const ERR: f64 = 1e-6;

/******************************************************************************/

/// A single micro-rotation step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Add the elementary angle to the running sum
    Add,
    /// Subtract the elementary angle from the running sum
    Sub,
    /// Leave the running sum unchanged
    Skip
}

/// A bounded sequence of micro-rotation steps
///
/// Position i refers to the elementary angle atan(2⁻ⁱ); the sequence length is the convergence
/// depth reached by [`decompose()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpSequence {
    ops: [Op; TABLE_DEPTH],
    depth: usize
}

impl OpSequence {
    /// Number of table entries consumed before the tolerance was reached
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The recorded operations, one per table index
    pub fn as_slice(&self) -> &[Op] {
        &self.ops[..self.depth]
    }
}

/******************************************************************************/

/// Approximates an angle as a sum of elementary angles
///
/// The angle must be in the [0, π/2] range; other angles must first be reduced by the caller
/// using the usual trigonometric identities.
///
/// The returned sequence stops at the first index where the running sum lands within 1e-6 of the
/// target, or covers the whole table if the tolerance is never reached; the latter is not an
/// error, only reduced precision.
pub fn decompose(alpha: f64) -> OpSequence {
    debug_assert!((0.0..=core::f64::consts::FRAC_PI_2).contains(&alpha));

    let mut ops = [Op::Skip; TABLE_DEPTH];
    let mut sum = 0.0;
    for (i, op) in ops.iter_mut().enumerate() {
        let sum_add = sum + THETA_TABLE[i];
        let sum_sub = sum - THETA_TABLE[i];
        let distance_add = libm::fabs(alpha - sum_add);
        let distance_sub = libm::fabs(alpha - sum_sub);
        let distance_skip = libm::fabs(alpha - sum);

        // The comparison order decides exact ties: Add wins over Sub, Skip is the fallback
        if distance_add <= distance_sub {
            if distance_add < distance_skip {
                *op = Op::Add;
                sum = sum_add;
            }
        } else if distance_sub < distance_skip {
            *op = Op::Sub;
            sum = sum_sub;
        }

        // Checked every iteration, even when nothing moved
        if libm::fabs(alpha - sum) < ERR {
            return OpSequence { ops, depth: i + 1 };
        }
    }
    OpSequence { ops, depth: TABLE_DEPTH }
}

/******************************************************************************/
