//! keyward: a permission-gated, hierarchical key/value store.
//!
//! Colon-delimited paths (`"user:address:city"`) resolve through a tree
//! of store nodes. Every node carries a [`Schema`] declaring permission
//! tags per key, with a default policy for undeclared keys; every
//! operation is gated on the first segment of the node holding it. A
//! slot holds one of three things, and resolution branches on nothing
//! else:
//!
//! - [`StoreValue::Data`]: plain JSON-like data, descended into freely
//! - [`StoreValue::Callable`]: a zero-argument [`Thunk`], invoked on
//!   every read
//! - [`StoreValue::Store`]: a nested [`PathStore`] enforcing its own
//!   schema
//!
//! # Example
//!
//! ```rust
//! use keyward::{PathStore, Permission, Schema, StoreResult, StoreValue, Value};
//!
//! let schema = Schema::new(Permission::ReadWrite)
//!     .declare("version", Permission::Read)
//!     .declare("secret", Permission::None);
//! let mut store = PathStore::with_schema(schema).seed("version", 3);
//!
//! store.write("user:name", "Ada").unwrap();
//! assert_eq!(
//!     store.read("user:name").unwrap().into_value(),
//!     Some(Value::from("Ada"))
//! );
//!
//! // declared read-only: visible in entries(), not writable
//! assert!(store.write("version", 4).is_err());
//! assert_eq!(store.entries().len(), 1);
//!
//! // declared none: no access at all
//! assert!(store.read("secret").is_err());
//!
//! // callables resolve on read
//! store
//!     .write("pi", StoreValue::callable(|| StoreResult::Value(Value::from(3.14))))
//!     .unwrap();
//! assert_eq!(store.read("pi").unwrap().into_value(), Some(Value::from(3.14)));
//! ```

mod slot;
mod store;
mod thunk;

pub use slot::{StoreResult, StoreValue};
pub use store::PathStore;
pub use thunk::Thunk;

// Re-export core types, the `path!` macro included
pub use keyward_core::path;
pub use keyward_core::{
    Error, Operation, Path, PathError, Permission, PermissionLookup, PermissionSet, Schema, Value,
    MAX_SEGMENTS,
};
