//! Runtime value representation.
//!
//! # Ownership
//!
//! `Value` wraps an `Rc` around a tracked payload. The strong count of that
//! `Rc` is the value's reference count:
//!
//! - every constructor returns a handle with count 1 (the creator owns it)
//! - [`Value::add_ref`] (or `clone`) increments and returns another handle
//! - [`Value::release`] (or dropping a handle) decrements
//! - when the count goes from 1 to 0 the payload and its string bytes are
//!   freed, and [`stats`](crate::stats) records the release
//!
//! A released handle is moved away, so no code can read a value after its
//! count reaches zero.
//!
//! Values are single-threaded (`Rc`, not `Arc`); the runtime has no
//! concurrent evaluation.

use std::fmt;
use std::rc::Rc;

use crate::stats;

/// Type tag of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
    Resource,
}

impl ValueKind {
    /// The scripting-level type name (as reported by `gettype`).
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Null => "NULL",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Float => "double",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Resource => "resource",
        }
    }
}

/// Payload of a value.
///
/// `Array`, `Object` and `Resource` are placeholders for variants the core
/// does not model yet. Nothing in the runtime constructs them; they exist so
/// rendering and truthiness have a defined answer when a host does.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueData {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Byte string; may contain NUL.
    Str(Vec<u8>),
    Array,
    Object,
    Resource,
}

impl ValueData {
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueData::Null => ValueKind::Null,
            ValueData::Bool(_) => ValueKind::Bool,
            ValueData::Int(_) => ValueKind::Int,
            ValueData::Float(_) => ValueKind::Float,
            ValueData::Str(_) => ValueKind::String,
            ValueData::Array => ValueKind::Array,
            ValueData::Object => ValueKind::Object,
            ValueData::Resource => ValueKind::Resource,
        }
    }
}

/// Payload plus release accounting.
struct Tracked(ValueData);

impl Tracked {
    fn new(data: ValueData) -> Self {
        stats::record_created();
        Tracked(data)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        stats::record_released();
    }
}

/// Reference-counted runtime value.
#[derive(Clone)]
pub struct Value(Rc<Tracked>);

// Factory Methods

impl Value {
    /// Wrap a payload in a new value with count 1.
    pub fn new(data: ValueData) -> Self {
        Value(Rc::new(Tracked::new(data)))
    }

    #[inline]
    pub fn null() -> Self {
        Value::new(ValueData::Null)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::new(ValueData::Bool(b))
    }

    #[inline]
    pub fn int(n: i64) -> Self {
        Value::new(ValueData::Int(n))
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::new(ValueData::Float(f))
    }

    /// Create a string value, copying `s`.
    #[inline]
    pub fn string(s: &str) -> Self {
        Value::new(ValueData::Str(s.as_bytes().to_vec()))
    }

    /// Create a string value from raw bytes, copying them.
    #[inline]
    pub fn bytes(b: &[u8]) -> Self {
        Value::new(ValueData::Str(b.to_vec()))
    }

    /// Create a string value from exactly `len` bytes of `b`.
    ///
    /// Embedded NUL bytes are kept. A `len` past the end of `b` is clamped.
    pub fn string_with_len(b: &[u8], len: usize) -> Self {
        Value::bytes(&b[..len.min(b.len())])
    }

    /// Create a string value, or `Null` if there is no input.
    pub fn string_or_null(s: Option<&str>) -> Self {
        match s {
            Some(s) => Value::string(s),
            None => Value::null(),
        }
    }
}

// Ownership

impl Value {
    /// Take one more ownership unit and return it as a new handle.
    #[inline]
    #[must_use]
    pub fn add_ref(&self) -> Value {
        self.clone()
    }

    /// Give back this handle's ownership unit.
    ///
    /// If it was the last one the payload is freed.
    #[inline]
    pub fn release(self) {
        drop(self);
    }

    /// Current number of ownership units.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Whether two handles share one payload.
    #[inline]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// Inspection

impl Value {
    #[inline]
    pub fn data(&self) -> &ValueData {
        &self.0 .0
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.data().kind()
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// String bytes, if this is a string.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self.data() {
            ValueData::Str(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.data() {
            ValueData::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.data() {
            ValueData::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.data() {
            ValueData::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.data(), ValueData::Null)
    }

    /// Truth table used by `empty()`.
    ///
    /// `Array` counts as empty unconditionally; `Object` and `Resource`
    /// are never empty.
    #[allow(clippy::float_cmp, reason = "exact zero test, -0.0 included")]
    pub fn is_falsy(&self) -> bool {
        match self.data() {
            ValueData::Null | ValueData::Array => true,
            ValueData::Bool(b) => !b,
            ValueData::Int(n) => *n == 0,
            ValueData::Float(f) => *f == 0.0,
            ValueData::Str(s) => s.is_empty(),
            ValueData::Object | ValueData::Resource => false,
        }
    }
}

impl PartialEq for Value {
    /// Payload equality; ownership counts are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data() {
            ValueData::Str(b) => write!(f, "Str({:?})", String::from_utf8_lossy(b)),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests;
