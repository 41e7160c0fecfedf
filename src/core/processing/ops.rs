//! The four built-in arithmetic operations.
//!
//! Each operation is a stateless unit implementing [`Operation`]: a pure
//! compute function over two integers plus a shared validity predicate.
//! Division never fails; a zero divisor yields the sentinel `0.0`, which the
//! validity predicate then classifies as invalid.

/// A pluggable arithmetic operation over one row of input.
pub trait Operation {
    /// Compute the result for one pair of operands. Arithmetic happens in
    /// `f64`, so extreme operands lose precision instead of overflowing.
    fn compute(&self, value1: i64, value2: i64) -> f64;

    /// Classify a computed result. Shared by all operations: anything
    /// non-positive (including the division-by-zero sentinel) is invalid.
    fn is_valid(&self, result: f64) -> bool {
        result > 0.0
    }
}

pub struct Plus;

impl Operation for Plus {
    fn compute(&self, value1: i64, value2: i64) -> f64 {
        value1 as f64 + value2 as f64
    }
}

pub struct Minus;

impl Operation for Minus {
    fn compute(&self, value1: i64, value2: i64) -> f64 {
        value1 as f64 - value2 as f64
    }
}

pub struct Multiply;

impl Operation for Multiply {
    fn compute(&self, value1: i64, value2: i64) -> f64 {
        value1 as f64 * value2 as f64
    }
}

pub struct Division;

impl Operation for Division {
    fn compute(&self, value1: i64, value2: i64) -> f64 {
        if value2 == 0 {
            return 0.0;
        }
        round_2dp(value1 as f64 / value2 as f64)
    }
}

/// Round to 2 decimal places, ties away from zero.
fn round_2dp(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
