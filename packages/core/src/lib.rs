//! Core keyward types: the vocabulary every other crate speaks.
//!
//! - `Path`: colon-delimited, validated, never empty
//! - `Value`: plain tree-shaped data (the JSON-like leaves)
//! - `Permission` / `PermissionSet` / `Schema`: per-key access tags and
//!   the per-node declaration table, consumed through the
//!   `PermissionLookup` trait
//! - `Error`: the shared failure taxonomy
//!
//! # Example
//!
//! ```rust
//! use keyward_core::{path, Permission, PermissionLookup, Schema};
//!
//! let schema = Schema::new(Permission::ReadWrite).declare("secret", Permission::None);
//! assert!(schema.allows_read("public"));
//! assert!(!schema.allows_read("secret"));
//!
//! let p = path!("user:address:city");
//! assert_eq!(p.first(), "user");
//! ```

mod error;
mod path;
mod policy;
mod value;

pub use error::{Error, Operation};
pub use path::{Path, PathError, MAX_SEGMENTS};
pub use policy::{Permission, PermissionLookup, PermissionSet, Schema};
pub use value::Value;
