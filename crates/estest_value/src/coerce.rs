//! Host type conversions: `ToPrimitive`, `ToString`, `ToNumeric`.
//!
//! These implement the conversions the host's relational operators and
//! template strings apply before comparing or printing. Conversions that
//! the host would abort with a `TypeError` (anything touching a symbol
//! implicitly) return `None`.

use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

/// Result of `ToNumeric`: the host has two numeric kinds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Numeric {
    Number(f64),
    BigInt(i128),
}

/// `ToPrimitive` with the number hint.
///
/// Primitives are returned unchanged. Plain objects and arrays have no
/// primitive `valueOf`, so they fall through to their string form.
pub fn to_primitive(value: &Value) -> Option<Value> {
    match value {
        Value::Array(items) => join_elements(items).map(Value::string),
        Value::Object(_) => Some(Value::string("[object Object]")),
        Value::Function(func) => Some(Value::string(func.source_text())),
        _ => Some(value.clone()),
    }
}

/// `ToString`. `None` for symbols, which refuse implicit conversion.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::Undefined => Some("undefined".to_string()),
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_to_string(*n)),
        Value::BigInt(n) => Some(n.to_string()),
        Value::Str(s) => Some(s.to_string()),
        Value::Symbol(_) => None,
        Value::Array(items) => join_elements(items),
        Value::Object(_) => Some("[object Object]".to_string()),
        Value::Function(func) => Some(func.source_text()),
    }
}

/// `Array.prototype.join(",")`: holes, `null` and `undefined` become empty.
fn join_elements(items: &[Value]) -> Option<String> {
    ensure_sufficient_stack(|| {
        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Undefined | Value::Null => parts.push(String::new()),
                _ => parts.push(to_text(item)?),
            }
        }
        Some(parts.join(","))
    })
}

/// `ToNumeric`. `None` when the value is or converts to a symbol.
pub fn to_numeric(value: &Value) -> Option<Numeric> {
    match value {
        Value::Undefined => Some(Numeric::Number(f64::NAN)),
        Value::Null => Some(Numeric::Number(0.0)),
        Value::Bool(b) => Some(Numeric::Number(if *b { 1.0 } else { 0.0 })),
        Value::Number(n) => Some(Numeric::Number(*n)),
        Value::BigInt(n) => Some(Numeric::BigInt(*n)),
        Value::Str(s) => Some(Numeric::Number(string_to_number(s))),
        Value::Symbol(_) => None,
        Value::Array(_) | Value::Object(_) | Value::Function(_) => {
            to_numeric(&to_primitive(value)?)
        }
    }
}

/// Whitespace as the host's string-to-number grammar defines it.
fn is_host_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Split a `0x`/`0o`/`0b` prefix off a trimmed numeric literal.
fn radix_prefix(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// `StringToNumber`.
///
/// Empty or all-whitespace strings are `0`. Anything outside the numeric
/// literal grammar is NaN; Rust spellings such as `inf` or `1_000` are not
/// accepted.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_host_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    if let Some((radix, digits)) = radix_prefix(s) {
        if digits.is_empty() {
            return f64::NAN;
        }
        let mut acc = 0.0_f64;
        for c in digits.chars() {
            match c.to_digit(radix) {
                Some(d) => acc = acc * f64::from(radix) + f64::from(d),
                None => return f64::NAN,
            }
        }
        return acc;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let well_formed = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && s.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// `StringToBigInt`. `None` when the string is not an integer literal.
pub fn string_to_bigint(s: &str) -> Option<i128> {
    let s = s.trim_matches(is_host_whitespace);
    if s.is_empty() {
        return Some(0);
    }
    if let Some((radix, digits)) = radix_prefix(s) {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return i128::from_str_radix(digits, radix).ok();
    }
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i128>().ok()
}

/// `Number::toString` in radix 10.
///
/// Shortest round-trip digits, laid out the way the host does: plain
/// decimals for exponents in `-7..21`, otherwise `d.ddde+N` notation.
/// `-0` prints as `0`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // LowerExp yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return n.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = i64::try_from(digits.len()).unwrap_or(i64::MAX);
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent.saturating_add(1);

    let body = if k <= point && point <= 21 {
        let zeros = usize::try_from(point.saturating_sub(k)).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < point && point <= 21 {
        let split = usize::try_from(point).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < point && point <= 0 {
        let zeros = usize::try_from(point.saturating_neg()).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let e = point.saturating_sub(1);
        let e_sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{e_sign}{}", e.unsigned_abs())
        } else {
            format!("{first}.{rest}e{e_sign}{}", e.unsigned_abs())
        }
    };
    format!("{sign}{body}")
}
