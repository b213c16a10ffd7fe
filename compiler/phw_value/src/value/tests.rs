use super::*;
use crate::stats::{created_values, live_values, released_values};
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn constructors_start_with_one_owner() {
    for value in [
        Value::null(),
        Value::bool(true),
        Value::int(7),
        Value::float(1.5),
        Value::string("abc"),
    ] {
        assert_eq!(value.ref_count(), 1);
    }
}

#[test]
fn constructors_set_kind() {
    assert_eq!(Value::null().kind(), ValueKind::Null);
    assert_eq!(Value::bool(false).kind(), ValueKind::Bool);
    assert_eq!(Value::int(0).kind(), ValueKind::Int);
    assert_eq!(Value::float(0.0).kind(), ValueKind::Float);
    assert_eq!(Value::string("").kind(), ValueKind::String);
}

#[test]
fn string_copies_input() {
    let mut source = String::from("abc");
    let value = Value::string(&source);
    source.push('d');
    assert_eq!(value.as_bytes(), Some(&b"abc"[..]));
}

#[test]
fn string_with_len_keeps_embedded_nul() {
    let value = Value::string_with_len(b"a\0bcd", 3);
    assert_eq!(value.as_bytes(), Some(&b"a\0b"[..]));
}

#[test]
fn string_with_len_clamps_to_input() {
    let value = Value::string_with_len(b"ab", 10);
    assert_eq!(value.as_bytes(), Some(&b"ab"[..]));
}

#[test]
fn absent_string_input_is_null() {
    assert!(Value::string_or_null(None).is_null());
    assert_eq!(Value::string_or_null(Some("x")), Value::string("x"));
}

#[test]
fn type_names() {
    assert_eq!(Value::null().type_name(), "NULL");
    assert_eq!(Value::bool(true).type_name(), "boolean");
    assert_eq!(Value::int(1).type_name(), "integer");
    assert_eq!(Value::float(1.0).type_name(), "double");
    assert_eq!(Value::string("s").type_name(), "string");
    assert_eq!(Value::new(ValueData::Array).type_name(), "array");
}

// === Ownership ===

#[test]
fn add_ref_then_release_restores_count_and_content() {
    let s = Value::string("shared");
    let extra = s.add_ref();
    assert_eq!(s.ref_count(), 2);
    assert!(s.ptr_eq(&extra));
    extra.release();
    assert_eq!(s.ref_count(), 1);
    assert_eq!(s.as_bytes(), Some(&b"shared"[..]));
}

#[test]
fn payload_is_freed_exactly_once() {
    let created_before = created_values();
    let released_before = released_values();

    let s = Value::string("once");
    let a = s.add_ref();
    let b = s.add_ref();
    assert_eq!(created_values() - created_before, 1);

    s.release();
    a.release();
    assert_eq!(released_values() - released_before, 0);
    b.release();
    assert_eq!(released_values() - released_before, 1);
}

#[test]
fn no_values_leak() {
    let live_before = live_values();
    {
        let values: Vec<Value> = (0..10).map(Value::int).collect();
        let shared: Vec<Value> = values.iter().map(Value::add_ref).collect();
        assert_eq!(live_values() - live_before, 10);
        drop(values);
        assert_eq!(live_values() - live_before, 10);
        drop(shared);
    }
    assert_eq!(live_values(), live_before);
}

// === Truthiness ===

#[test]
fn falsy_values() {
    assert!(Value::null().is_falsy());
    assert!(Value::bool(false).is_falsy());
    assert!(Value::int(0).is_falsy());
    assert!(Value::float(0.0).is_falsy());
    assert!(Value::float(-0.0).is_falsy());
    assert!(Value::string("").is_falsy());
    assert!(Value::new(ValueData::Array).is_falsy());
}

#[test]
fn truthy_values() {
    assert!(!Value::bool(true).is_falsy());
    assert!(!Value::int(-1).is_falsy());
    assert!(!Value::float(0.5).is_falsy());
    assert!(!Value::string("0").is_falsy());
    assert!(!Value::new(ValueData::Object).is_falsy());
    assert!(!Value::new(ValueData::Resource).is_falsy());
}

// === Equality ===

#[test]
fn equality_compares_payload_not_identity() {
    assert_eq!(Value::string("a"), Value::string("a"));
    assert_ne!(Value::string("a"), Value::string("b"));
    assert_ne!(Value::int(1), Value::float(1.0));
}
