//! The runtime value representation.
//!
//! `Value` is a small tagged union over the primitives the VM operates on
//! directly (`Int`, `Bool`, `Nil`) plus a [`Handle`](crate::heap::Handle)
//! into the heap for everything that needs indirection (strings, arrays).

use core::fmt;

use crate::heap::Handle;

/// A runtime value. `Nil` is the default, observable whenever an array
/// slot is allocated but not yet written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Nil,
    Object(Handle),
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil
    }
}

impl Value {
    /// Coerce to an integer for arithmetic opcodes: `Int` passes through,
    /// `Bool` coerces (`true` → 1, `false` → 0), everything else fails.
    pub fn as_arith_int(self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n),
            Value::Bool(b) => Some(b as i64),
            _ => None,
        }
    }

    /// Extract an integer without the bool coercion arithmetic allows;
    /// used by comparisons and indexing, which require `Int` strictly.
    pub fn as_strict_int(self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_object(self) -> Option<Handle> {
        match self {
            Value::Object(h) => Some(h),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// The canonical PRINT form: the int's decimal text, `true`/`false`,
    /// `nil`, or `<object>` for anything heap-allocated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Nil => write!(f, "nil"),
            Value::Object(_) => write!(f, "<object>"),
        }
    }
}
