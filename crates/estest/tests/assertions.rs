//! End-to-end checks through the public call shapes.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use estest::{
    format_diagnostic, AssertErrorKind, Engine, EngineConfig, ExecutionMode, Operator, Passed,
    TypeTag, Value,
};
use pretty_assertions::assert_eq;

fn check(subject: &Value, mode: &str) -> Result<Passed, estest::AssertError> {
    Engine::default().check(subject, &Value::string(mode), None, None)
}

fn compare(subject: &Value, op: &str, comparand: &Value) -> Result<Passed, estest::AssertError> {
    Engine::default().check(subject, &Value::string(op), Some(comparand), None)
}

#[test]
fn number_is_a_number() {
    assert_eq!(
        check(&Value::from(5), "number"),
        Ok(Passed::Type(TypeTag::Number))
    );
}

#[test]
fn number_is_not_a_string() {
    let err = check(&Value::from(5), "string").unwrap_err();
    assert!(matches!(err.kind, AssertErrorKind::TypeMismatch { .. }));
    assert!(err.message.contains("'number'"));
    assert!(err.message.contains("'string'"));
}

#[test]
fn less_than_holds() {
    assert_eq!(
        compare(&Value::from(5), "<", &Value::from(10)),
        Ok(Passed::Comparison(Operator::Lt))
    );
}

#[test]
fn greater_than_fails_with_both_operands() {
    let err = compare(&Value::from(5), ">", &Value::from(10)).unwrap_err();
    assert!(matches!(err.kind, AssertErrorKind::ComparisonFailed { .. }));
    assert!(err.message.contains('5'));
    assert!(err.message.contains("10"));
    assert!(err.message.contains('>'));
}

#[test]
fn unknown_mode_fails_before_comparing() {
    let err = check(&Value::from(5), "not-a-mode").unwrap_err();
    assert!(matches!(err.kind, AssertErrorKind::InvalidMode { .. }));
}

#[test]
fn numeric_message_is_rejected() {
    let err = Engine::default()
        .check(
            &Value::from(5),
            &Value::string("number"),
            Some(&Value::from(123)),
            None,
        )
        .unwrap_err();
    assert!(matches!(err.kind, AssertErrorKind::InvalidMessageType { .. }));
}

#[test]
fn nested_array_is_an_array_and_renders_collapsed() {
    let nested = Value::array(vec![
        Value::from(1),
        Value::array(vec![Value::from(2), Value::from(3)]),
    ]);
    assert_eq!(check(&nested, "array"), Ok(Passed::Type(TypeTag::Array)));
    for _ in 0..3 {
        assert_eq!(format_diagnostic(&nested), "[1, [...]]");
    }
}

#[test]
fn containers_compare_by_identity() {
    let list = Value::array(vec![Value::from(1)]);
    let same = list.clone();
    let lookalike = Value::array(vec![Value::from(1)]);
    assert!(compare(&list, "===", &same).is_ok());
    assert!(compare(&list, "!==", &lookalike).is_ok());
}

#[test]
fn nan_is_never_strictly_equal() {
    let nan = Value::from(f64::NAN);
    assert!(compare(&nan, "!==", &nan).is_ok());
    assert!(compare(&nan, "===", &nan).is_err());
}

#[test]
fn mixed_type_relations_coerce() {
    assert!(compare(&Value::string("10"), ">", &Value::from(9)).is_ok());
    assert!(compare(&Value::string("10"), "<", &Value::string("9")).is_ok());
    assert!(compare(&Value::BigInt(3), "<=", &Value::from(3.5)).is_ok());
    assert!(compare(&Value::Null, ">=", &Value::from(0)).is_ok());
    assert!(compare(&Value::Undefined, "<=", &Value::from(0)).is_err());
}

#[test]
fn production_engine_hides_values() {
    let engine = Engine::new(EngineConfig::new().with_mode(ExecutionMode::Production));
    let err = engine
        .assert_op(
            &Value::string("s3cr3t"),
            Operator::StrictEq,
            &Value::string("guess"),
            Some("api key mismatch"),
        )
        .unwrap_err();
    assert_eq!(
        err.message,
        "❌ assertion failed (details redacted)\n📝 api key mismatch"
    );
    assert!(!err.to_string().contains("s3cr3t"));
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(Engine::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .assert_op(&Value::from(i), Operator::Lt, &Value::from(10), None)
                    .is_ok()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(engine.last_passed(), Some(Passed::Comparison(Operator::Lt)));
}
