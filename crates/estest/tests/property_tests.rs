//! Property-based tests for the assertion engine.
//!
//! 1. asserting a value's own classification always passes
//! 2. `<` and `>=` are complementary when neither side is NaN
//! 3. `===` is reflexive for every non-NaN value

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use estest::{classify, evaluate_operator, Engine, Operator, Passed, Value};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::BigInt(i128::from(n))),
        "[a-z0-9 ]{0,8}".prop_map(Value::string),
        "[a-z]{0,6}".prop_map(Value::function),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4).prop_map(Value::object),
        ]
    })
}

fn finite_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        (-1_000_000i64..1_000_000).prop_map(|n| Value::BigInt(i128::from(n))),
    ]
}

proptest! {
    #[test]
    fn own_classification_passes(value in value_strategy()) {
        let tag = classify(&value);
        let engine = Engine::default();
        let passed = engine.check(&value, &Value::string(tag.as_str()), None, None);
        prop_assert_eq!(passed, Ok(Passed::Type(tag)));
    }

    #[test]
    fn lt_and_gteq_are_complementary(a in finite_number(), b in finite_number()) {
        let lt = evaluate_operator(&a, Operator::Lt, &b);
        let gteq = evaluate_operator(&a, Operator::GtEq, &b);
        prop_assert_ne!(lt, gteq);
    }

    #[test]
    fn strict_equality_is_reflexive(value in value_strategy()) {
        let is_nan = matches!(value, Value::Number(n) if n.is_nan());
        prop_assert_eq!(evaluate_operator(&value, Operator::StrictEq, &value.clone()), !is_nan);
        prop_assert_eq!(evaluate_operator(&value, Operator::StrictNotEq, &value), is_nan);
    }
}
