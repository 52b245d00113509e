use super::*;

fn holds(left: impl Into<Value>, op: &str, right: impl Into<Value>) -> bool {
    let op = Operator::from_symbol(op).unwrap_or_else(|| panic!("unknown operator {op}"));
    evaluate_operator(&left.into(), op, &right.into())
}

#[test]
fn numbers_order() {
    assert!(holds(5, "<", 10));
    assert!(!holds(5, ">", 10));
    assert!(holds(5, "<=", 5));
    assert!(holds(5, ">=", 5));
    assert!(!holds(5, "<", 5));
    assert!(holds(-0.0, ">=", 0.0));
}

#[test]
fn nan_makes_every_ordering_false() {
    let nan = f64::NAN;
    for op in ["<", "<=", ">", ">="] {
        assert!(!holds(nan, op, 1), "NaN {op} 1");
        assert!(!holds(1, op, nan), "1 {op} NaN");
    }
    assert!(!holds(nan, "===", nan));
    assert!(holds(nan, "!==", nan));
}

#[test]
fn strings_compare_by_code_units() {
    assert!(holds("a", "<", "b"));
    assert!(holds("B", "<", "a"));
    assert!(holds("10", "<", "9"));
    assert!(holds("", "<", "a"));
    // U+FF61 is one code unit; U+1F600 is a surrogate pair starting 0xD83D.
    assert!(holds("\u{1F600}", "<", "\u{FF61}"));
}

#[test]
fn mixed_string_and_number_compare_numerically() {
    assert!(holds("10", ">", 9));
    assert!(holds(2, "<", "10"));
    assert!(!holds("abc", "<", 1));
    assert!(!holds("abc", ">=", 1));
    assert!(holds(" 3 ", "===", " 3 "));
}

#[test]
fn null_undefined_and_booleans_coerce() {
    assert!(holds(Value::Null, ">=", 0));
    assert!(holds(Value::Null, "<", 1));
    assert!(!holds(Value::Undefined, ">=", 0));
    assert!(!holds(Value::Undefined, "<=", 0));
    assert!(holds(true, ">", false));
    assert!(holds(true, ">=", 1));
}

#[test]
fn bigint_comparisons() {
    assert!(holds(Value::BigInt(1), "<", Value::BigInt(2)));
    assert!(holds(Value::BigInt(2), ">", 1.5));
    assert!(holds(1.5, "<", Value::BigInt(2)));
    assert!(holds(Value::BigInt(2), ">=", 2));
    assert!(holds(Value::BigInt(-2), "<", -1.5));
    assert!(holds(Value::BigInt(i128::MAX), "<", f64::INFINITY));
    assert!(holds(Value::BigInt(i128::MIN), ">", f64::NEG_INFINITY));
    assert!(!holds(Value::BigInt(1), "<", f64::NAN));
    assert!(holds(Value::BigInt(10), ">", "9"));
    assert!(!holds(Value::BigInt(10), ">", "9.5"));
    // No coercion for strict equality.
    assert!(!holds(Value::BigInt(2), "===", 2));
}

#[test]
fn arrays_and_objects_order_by_string_form() {
    let pair = Value::array(vec![Value::from(1), Value::from(2)]);
    assert!(holds(pair.clone(), ">", "1,1"));
    assert!(holds(Value::array(vec![Value::from(5)]), ">", 4));
    let object = Value::object([("a", Value::from(1))]);
    assert!(holds(object.clone(), "<=", "[object Object]"));
    assert!(!holds(object, "<", 1));
}

#[test]
fn symbols_never_order() {
    let sym = Value::symbol(None);
    for op in ["<", "<=", ">", ">="] {
        assert!(!holds(sym.clone(), op, 1));
        assert!(!holds(1, op, sym.clone()));
    }
    assert!(holds(sym.clone(), "===", sym.clone()));
    assert!(holds(sym, "!==", Value::symbol(None)));
}

#[test]
fn strict_equality_is_identity_for_containers() {
    let xs = Value::array(vec![Value::from(1)]);
    assert!(holds(xs.clone(), "===", xs.clone()));
    assert!(!holds(xs.clone(), "===", Value::array(vec![Value::from(1)])));
    assert!(holds(xs, "!==", Value::array(vec![Value::from(1)])));
}

#[test]
fn strict_equality_never_coerces() {
    assert!(!holds(1, "===", "1"));
    assert!(holds(1, "!==", "1"));
    assert!(!holds(Value::Null, "===", Value::Undefined));
    assert!(holds(0.0, "===", -0.0));
}

#[test]
fn compare_bigint_number_edges() {
    assert_eq!(compare_bigint_number(3, 3.0), Some(Ordering::Equal));
    assert_eq!(compare_bigint_number(3, 3.5), Some(Ordering::Less));
    assert_eq!(compare_bigint_number(-3, -3.5), Some(Ordering::Greater));
    assert_eq!(compare_bigint_number(0, f64::NAN), None);
    assert_eq!(
        compare_bigint_number(i128::MIN, -170_141_183_460_469_231_731_687_303_715_884_105_728.0),
        Some(Ordering::Equal)
    );
}
