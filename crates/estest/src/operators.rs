//! Operator evaluation with host semantics.
//!
//! `===`/`!==` never coerce. The ordering operators follow the host's
//! abstract relational comparison: convert both sides to primitives,
//! compare strings by UTF-16 code units, otherwise compare numerically
//! across the number and bigint kinds. A comparison involving NaN or an
//! unconvertible value (a symbol) is undefined, which every ordering
//! operator treats as false.

use std::cmp::Ordering;

use estest_value::coerce::{string_to_bigint, to_numeric, to_primitive, Numeric};
use estest_value::Value;

use crate::mode::Operator;

/// Evaluate `left <op> right`.
pub fn evaluate_operator(left: &Value, op: Operator, right: &Value) -> bool {
    match op {
        Operator::StrictEq => left.strict_equals(right),
        Operator::StrictNotEq => !left.strict_equals(right),
        Operator::Lt => less_than(left, right) == Some(true),
        Operator::Gt => less_than(right, left) == Some(true),
        // `a <= b` is `!(b < a)`, except that undefined stays false.
        Operator::LtEq => less_than(right, left) == Some(false),
        Operator::GtEq => less_than(left, right) == Some(false),
    }
}

/// Abstract relational comparison `x < y`. `None` means undefined.
fn less_than(x: &Value, y: &Value) -> Option<bool> {
    let px = to_primitive(x)?;
    let py = to_primitive(y)?;

    match (&px, &py) {
        (Value::Str(a), Value::Str(b)) => return Some(a.encode_utf16().lt(b.encode_utf16())),
        (Value::BigInt(a), Value::Str(b)) => return Some(*a < string_to_bigint(b)?),
        (Value::Str(a), Value::BigInt(b)) => return Some(string_to_bigint(a)? < *b),
        _ => {}
    }

    match (to_numeric(&px)?, to_numeric(&py)?) {
        (Numeric::Number(a), Numeric::Number(b)) => {
            a.partial_cmp(&b).map(|ord| ord == Ordering::Less)
        }
        (Numeric::BigInt(a), Numeric::BigInt(b)) => Some(a < b),
        (Numeric::BigInt(a), Numeric::Number(b)) => {
            compare_bigint_number(a, b).map(|ord| ord == Ordering::Less)
        }
        (Numeric::Number(a), Numeric::BigInt(b)) => {
            compare_bigint_number(b, a).map(|ord| ord == Ordering::Greater)
        }
    }
}

/// Exact comparison of an integer against a double. `None` for NaN.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "the cast happens only after range checks make it exact"
)]
fn compare_bigint_number(int: i128, num: f64) -> Option<Ordering> {
    /// 2^127 as a double: every i128 is strictly below it.
    const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

    if num.is_nan() {
        return None;
    }
    if num >= I128_BOUND {
        return Some(Ordering::Less);
    }
    if num < -I128_BOUND {
        return Some(Ordering::Greater);
    }
    let whole = num.trunc();
    let ord = int.cmp(&(whole as i128));
    if ord != Ordering::Equal {
        return Some(ord);
    }
    // Integer parts match; any fraction decides.
    Some(whole.partial_cmp(&num).unwrap_or(Ordering::Equal))
}

#[cfg(test)]
mod tests;
