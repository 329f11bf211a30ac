//! Typed access extension trait.

use serde::de::DeserializeOwned;
use serde::Serialize;

use keyward::{PathStore, StoreResult, StoreValue};

use crate::convert::{from_value, to_value};
use crate::error::Error;

/// Typed reads and writes for a [`PathStore`].
///
/// Permissions are enforced by the store exactly as for untyped access;
/// this trait only layers serde on top of the resolved data.
///
/// # Example
///
/// ```rust
/// use keyward::PathStore;
/// use keyward_serde::TypedStore;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Profile {
///     name: String,
///     age: u32,
/// }
///
/// # fn main() -> Result<(), keyward_serde::Error> {
/// let mut store = PathStore::new();
/// let profile = Profile { name: "ada".into(), age: 36 };
/// store.write_as("account:profile", &profile)?;
///
/// let back: Option<Profile> = store.read_as("account:profile")?;
/// assert_eq!(back, Some(profile));
/// # Ok(())
/// # }
/// ```
pub trait TypedStore {
    /// Read the value at `path` and deserialize it.
    ///
    /// An absent slot is `Ok(None)`. A nested store is [`Error::NotData`];
    /// snapshots are read with the untyped API instead.
    fn read_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error>;

    /// Serialize `data` and write it to `path` as plain data.
    fn write_as<T: Serialize>(&mut self, path: &str, data: &T) -> Result<(), Error>;
}

impl TypedStore for PathStore {
    fn read_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        match self.read(path)? {
            StoreResult::Absent => Ok(None),
            StoreResult::Store(_) => Err(Error::NotData {
                path: path.to_string(),
            }),
            StoreResult::Value(value) => Ok(Some(from_value(value)?)),
        }
    }

    fn write_as<T: Serialize>(&mut self, path: &str, data: &T) -> Result<(), Error> {
        let value = to_value(data)?;
        self.write(path, StoreValue::Data(value))?;
        Ok(())
    }
}
