//! The Value type - plain tree-shaped data.
//!
//! This is what lives at the data leaves of a store: anything JSON can
//! express, held directly rather than behind an encoding.

use std::collections::BTreeMap;

use crate::{Error, Path};

/// A tree-shaped plain-data value.
///
/// Maps directly onto JSON. Nested maps and arrays are traversed by the
/// same colon paths that address store slots, but carry no permission
/// or store semantics of their own.
///
/// # Design Notes
///
/// - Uses `BTreeMap` for deterministic ordering (stable `entries()`
///   snapshots and `Debug` output)
/// - Uses `i64` for integers
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Null. Distinct from "path doesn't exist".
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value map with string keys.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Create a null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this value can hold children (a map or an array).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Array(_))
    }

    /// Get a reference to a nested value by path.
    ///
    /// Maps are entered by key, arrays by numeric segment. Returns
    /// `None` if the path misses or tries to descend into a value that
    /// has no children (e.g. indexing into a string).
    pub fn get(&self, path: &Path) -> Option<&Value> {
        let mut current = self;
        for segment in path.iter() {
            current = match current {
                Value::Map(map) => map.get(segment)?,
                Value::Array(items) => {
                    let index: usize = segment.parse().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    /// Set a value at a path, creating intermediate maps as needed.
    ///
    /// A `Null` anywhere on the walk is promoted to an empty map so the
    /// write can proceed; any other non-container value blocks it.
    ///
    /// # Errors
    ///
    /// [`Error::NotContainer`] when the walk reaches a scalar. The
    /// error names the segment holding the scalar, not the one that
    /// failed to enter it (or the failing segment itself when this
    /// value is the scalar, since no holding segment exists here).
    /// [`Error::BadIndex`] for non-numeric or out-of-bounds array
    /// segments. The final index of an array may be one past the end
    /// (append).
    pub fn set(&mut self, path: &Path, value: Value) -> Result<(), Error> {
        let mut current = self;

        // Navigate to the parent of the final segment
        for segment in path.iter().take(path.len() - 1) {
            if current.is_null() {
                *current = Value::map();
            }
            let child = match current {
                Value::Map(map) => map.entry(segment.clone()).or_insert_with(Value::map),
                Value::Array(items) => {
                    let index = parse_index(segment)?;
                    let len = items.len();
                    items.get_mut(index).ok_or_else(|| Error::BadIndex {
                        segment: segment.clone(),
                        message: format!("index {} out of bounds (len {})", index, len),
                    })?
                }
                // only a scalar root reaches this arm
                _ => {
                    return Err(Error::NotContainer {
                        key: segment.clone(),
                    })
                }
            };
            if !child.is_null() && !child.is_container() {
                // the segment just walked holds the obstruction
                return Err(Error::NotContainer {
                    key: segment.clone(),
                });
            }
            current = child;
        }

        let last = &path[path.len() - 1];
        if current.is_null() {
            *current = Value::map();
        }
        match current {
            Value::Map(map) => {
                map.insert(last.clone(), value);
                Ok(())
            }
            Value::Array(items) => {
                let index = parse_index(last)?;
                if index < items.len() {
                    items[index] = value;
                } else if index == items.len() {
                    items.push(value);
                } else {
                    return Err(Error::BadIndex {
                        segment: last.clone(),
                        message: format!("index {} out of bounds (len {})", index, items.len()),
                    });
                }
                Ok(())
            }
            _ => Err(Error::NotContainer { key: last.clone() }),
        }
    }
}

fn parse_index(segment: &str) -> Result<usize, Error> {
    segment.parse().map_err(|_| Error::BadIndex {
        segment: segment.to_string(),
        message: "expected a numeric index".to_string(),
    })
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn get_nested_value() {
        let mut value = Value::map();
        value.set(&path!("foo:bar"), Value::from("hello")).unwrap();

        assert_eq!(value.get(&path!("foo:bar")), Some(&Value::from("hello")));
        let foo = value.get(&path!("foo")).unwrap();
        assert!(foo.is_map());
        assert_eq!(foo.get(&path!("bar")), Some(&Value::from("hello")));
        assert_eq!(value.get(&path!("nonexistent")), None);
    }

    #[test]
    fn get_through_scalar_misses() {
        let mut value = Value::map();
        value.set(&path!("n"), Value::from(5)).unwrap();
        assert_eq!(value.get(&path!("n:deeper")), None);
    }

    #[test]
    fn set_creates_intermediate_maps() {
        let mut value = Value::map();
        value.set(&path!("a:b:c:d"), Value::from(42i64)).unwrap();

        assert_eq!(value.get(&path!("a:b:c:d")), Some(&Value::from(42i64)));
        assert!(value.get(&path!("a")).unwrap().is_map());
        assert!(value.get(&path!("a:b")).unwrap().is_map());
    }

    #[test]
    fn set_twice_reuses_intermediates() {
        let mut value = Value::map();
        value.set(&path!("a:b"), Value::from(1)).unwrap();
        value.set(&path!("a:c"), Value::from(2)).unwrap();

        match value.get(&path!("a")).unwrap() {
            Value::Map(map) => assert_eq!(map.len(), 2),
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn set_promotes_null_to_map() {
        let mut value = Value::Null;
        value.set(&path!("a:b"), Value::from(7)).unwrap();
        assert_eq!(value.get(&path!("a:b")), Some(&Value::from(7)));

        let mut nested = Value::map();
        nested.set(&path!("x"), Value::Null).unwrap();
        nested.set(&path!("x:y"), Value::from(1)).unwrap();
        assert_eq!(nested.get(&path!("x:y")), Some(&Value::from(1)));
    }

    #[test]
    fn set_through_scalar_is_error() {
        let mut value = Value::map();
        value.set(&path!("n"), Value::from(5)).unwrap();

        let err = value.set(&path!("n:deeper"), Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            Error::NotContainer {
                key: "n".to_string()
            }
        );
        // Blocked write leaves the scalar in place
        assert_eq!(value.get(&path!("n")), Some(&Value::from(5)));
    }

    #[test]
    fn set_names_the_segment_holding_the_obstruction() {
        let mut value = Value::map();
        value.set(&path!("a:b"), Value::from(7)).unwrap();

        // the scalar sits under "b"; segments below it take no blame
        let err = value.set(&path!("a:b:c:d"), Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            Error::NotContainer {
                key: "b".to_string()
            }
        );

        let mut value = Value::map();
        value.set(&path!("items"), Value::from(vec![5])).unwrap();
        let err = value.set(&path!("items:0:x"), Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            Error::NotContainer {
                key: "0".to_string()
            }
        );
    }

    #[test]
    fn set_on_scalar_root_is_error() {
        let mut value = Value::from(5);
        let err = value.set(&path!("a"), Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            Error::NotContainer {
                key: "a".to_string()
            }
        );
    }

    #[test]
    fn array_access_works() {
        let mut value = Value::map();
        value
            .set(&path!("items"), Value::from(vec!["a", "b", "c"]))
            .unwrap();

        assert_eq!(value.get(&path!("items:0")), Some(&Value::from("a")));
        assert_eq!(value.get(&path!("items:1")), Some(&Value::from("b")));
        assert_eq!(value.get(&path!("items:2")), Some(&Value::from("c")));
        assert_eq!(value.get(&path!("items:3")), None);
        assert_eq!(value.get(&path!("items:nope")), None);
    }

    #[test]
    fn array_set_replaces_and_appends() {
        let mut value = Value::map();
        value.set(&path!("items"), Value::from(vec![1, 2])).unwrap();

        value.set(&path!("items:0"), Value::from(9)).unwrap();
        assert_eq!(value.get(&path!("items:0")), Some(&Value::from(9)));

        // index == len appends
        value.set(&path!("items:2"), Value::from(3)).unwrap();
        assert_eq!(value.get(&path!("items:2")), Some(&Value::from(3)));

        let err = value.set(&path!("items:9"), Value::from(0)).unwrap_err();
        assert!(matches!(err, Error::BadIndex { .. }));

        let err = value.set(&path!("items:x"), Value::from(0)).unwrap_err();
        assert!(matches!(err, Error::BadIndex { .. }));
    }

    #[test]
    fn default_is_null() {
        assert!(Value::default().is_null());
    }

    #[test]
    fn container_predicate() {
        assert!(Value::map().is_container());
        assert!(Value::array().is_container());
        assert!(!Value::Null.is_container());
        assert!(!Value::from(1).is_container());
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from("s"), Value::String("s".to_string()));
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        );

        let mut map = BTreeMap::new();
        map.insert("k".to_string(), Value::from(1));
        assert!(Value::from(map).is_map());
    }
}
