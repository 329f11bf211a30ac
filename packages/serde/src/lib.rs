//! Serde integration for keyward
//!
//! This layer provides typed access to permission-gated stores via serde:
//! - [`TypedStore`]: read paths directly into Rust types, write Rust types
//!   as plain data
//! - `Value` <-> `serde_json::Value` conversions
//!
//! Permission gates stay in force. A typed read of a denied key fails the
//! same way an untyped read does, and a nested store never deserializes.
//!
//! # Example
//!
//! ```rust
//! use keyward::{PathStore, Permission, Schema};
//! use keyward_serde::TypedStore;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Settings {
//!     theme: String,
//!     notifications: bool,
//! }
//!
//! # fn main() -> Result<(), keyward_serde::Error> {
//! let schema = Schema::new(Permission::None).declare("settings", Permission::ReadWrite);
//! let mut store = PathStore::with_schema(schema);
//!
//! let settings = Settings { theme: "dark".into(), notifications: true };
//! store.write_as("settings", &settings)?;
//!
//! let back: Option<Settings> = store.read_as("settings")?;
//! assert_eq!(back, Some(settings));
//! # Ok(())
//! # }
//! ```

mod convert;
mod error;
mod typed;

pub use convert::{from_value, json_to_value, to_value, value_to_json};
pub use error::Error;
pub use typed::TypedStore;

// Re-export the store types for convenience
pub use keyward::{PathStore, StoreResult, StoreValue, Value};
