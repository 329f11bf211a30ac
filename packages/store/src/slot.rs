//! Slot values and read outcomes.
//!
//! Every key of a store node holds a [`StoreValue`]; resolution
//! branches on its tag and nothing else. The three kinds cover plain
//! data, deferred computations, and nested stores with schemas of
//! their own.

use keyward_core::Value;

use crate::{PathStore, Thunk};

/// What a key slot can hold.
#[derive(Clone, Debug)]
pub enum StoreValue {
    /// Plain data, including arbitrarily nested maps and arrays.
    /// Paths descend into it without further permission boundaries.
    Data(Value),
    /// A deferred computation, invoked with no arguments whenever a
    /// read resolves this slot. Never returned raw.
    Callable(Thunk),
    /// A nested store enforcing its own schema on the segments below.
    Store(PathStore),
}

impl StoreValue {
    /// Shorthand for wrapping a closure as a callable slot value.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn() -> StoreResult + Send + Sync + 'static,
    {
        StoreValue::Callable(Thunk::new(f))
    }

    /// Check if this is plain data.
    pub fn is_data(&self) -> bool {
        matches!(self, StoreValue::Data(_))
    }

    /// Check if this is a callable.
    pub fn is_callable(&self) -> bool {
        matches!(self, StoreValue::Callable(_))
    }

    /// Check if this is a nested store.
    pub fn is_store(&self) -> bool {
        matches!(self, StoreValue::Store(_))
    }

    /// Borrow the plain data, if that is what this is.
    pub fn as_data(&self) -> Option<&Value> {
        match self {
            StoreValue::Data(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the nested store, if that is what this is.
    pub fn as_store(&self) -> Option<&PathStore> {
        match self {
            StoreValue::Store(store) => Some(store),
            _ => None,
        }
    }
}

impl From<Value> for StoreValue {
    fn from(v: Value) -> Self {
        StoreValue::Data(v)
    }
}

impl From<Thunk> for StoreValue {
    fn from(t: Thunk) -> Self {
        StoreValue::Callable(t)
    }
}

impl From<PathStore> for StoreValue {
    fn from(s: PathStore) -> Self {
        StoreValue::Store(s)
    }
}

// Scalar conveniences, routed through Value

impl From<bool> for StoreValue {
    fn from(v: bool) -> Self {
        StoreValue::Data(Value::from(v))
    }
}

impl From<i64> for StoreValue {
    fn from(v: i64) -> Self {
        StoreValue::Data(Value::from(v))
    }
}

impl From<i32> for StoreValue {
    fn from(v: i32) -> Self {
        StoreValue::Data(Value::from(v))
    }
}

impl From<f64> for StoreValue {
    fn from(v: f64) -> Self {
        StoreValue::Data(Value::from(v))
    }
}

impl From<String> for StoreValue {
    fn from(v: String) -> Self {
        StoreValue::Data(Value::from(v))
    }
}

impl From<&str> for StoreValue {
    fn from(v: &str) -> Self {
        StoreValue::Data(Value::from(v))
    }
}

/// The outcome of a resolved read.
///
/// A read lands on plain data, a store snapshot, or nothing. There is
/// no callable outcome: callables are always invoked during
/// resolution, so one can never leak out of a read.
///
/// `Absent` is distinct from `Value(Value::Null)` - a stored null reads
/// back as a null, a missing slot as `Absent`.
#[derive(Debug)]
pub enum StoreResult {
    /// Plain data.
    Value(Value),
    /// A snapshot of a nested store. Mutating the snapshot does not
    /// touch the tree it was read from.
    Store(PathStore),
    /// Nothing at the path.
    Absent,
}

impl StoreResult {
    /// Check if nothing was found.
    pub fn is_absent(&self) -> bool {
        matches!(self, StoreResult::Absent)
    }

    /// Borrow the data, if that is what resolved.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            StoreResult::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Take the data, if that is what resolved.
    pub fn into_value(self) -> Option<Value> {
        match self {
            StoreResult::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Take the store snapshot, if that is what resolved.
    pub fn into_store(self) -> Option<PathStore> {
        match self {
            StoreResult::Store(store) => Some(store),
            _ => None,
        }
    }
}

impl From<Value> for StoreResult {
    fn from(v: Value) -> Self {
        StoreResult::Value(v)
    }
}

impl From<PathStore> for StoreResult {
    fn from(s: PathStore) -> Self {
        StoreResult::Store(s)
    }
}
