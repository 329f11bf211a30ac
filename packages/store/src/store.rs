//! The store node: permission-gated slots resolved by colon paths.

use std::collections::BTreeMap;

use keyward_core::{Error, Operation, Path, Permission, PermissionLookup, Schema, Value};

use crate::{StoreResult, StoreValue};

/// A permission-gated, hierarchical key/value store.
///
/// Each node owns a flat set of key slots plus the [`Schema`] declaring
/// which keys carry which permission tags. Slots hold plain data,
/// callables, or nested `PathStore`s; colon-delimited paths resolve
/// through all three.
///
/// Permission checks target the first path segment on the node
/// currently holding it, never the resolved value. One deliberate
/// exception: when that segment's slot holds a nested store and more
/// path remains, resolution hands the remainder straight to the child
/// without consulting this node's policy for the hop - everything
/// beneath the child is governed by the child's own schema.
///
/// Reads are `&self` and return owned results: data is cloned out and
/// nested stores come back as snapshots, so mutating what a read
/// returned never touches the tree. The tree itself is strictly owned
/// and mutated in place, with no internal locking; wrap the whole store
/// in a lock if threads must share it.
///
/// # Example
///
/// ```rust
/// use keyward::{PathStore, Permission, Schema, Value};
///
/// let schema = Schema::new(Permission::ReadWrite).declare("secret", Permission::None);
/// let mut store = PathStore::with_schema(schema);
///
/// store.write("user:name", "Ada").unwrap();
/// let name = store.read("user:name").unwrap().into_value();
/// assert_eq!(name, Some(Value::from("Ada")));
///
/// assert!(store.write("secret", 42).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathStore {
    slots: BTreeMap<String, StoreValue>,
    schema: Schema,
}

impl PathStore {
    /// New store with the permissive default schema (`ReadWrite`
    /// default policy, no declarations).
    pub fn new() -> Self {
        PathStore::default()
    }

    /// New store governed by `schema`.
    pub fn with_schema(schema: Schema) -> Self {
        PathStore {
            slots: BTreeMap::new(),
            schema,
        }
    }

    /// Place `value` in a slot directly, bypassing the write gate.
    ///
    /// Construction-time seeding: initial contents exist before any
    /// permission question, which is the only way a read-only or
    /// `none` key can ever hold a value. Consumes and returns the
    /// store so calls chain after [`with_schema`](PathStore::with_schema).
    #[must_use]
    pub fn seed(mut self, key: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        self.slots.insert(key.into(), value.into());
        self
    }

    /// The schema governing this node.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The policy applied to keys this node's schema does not declare.
    pub fn default_policy(&self) -> Permission {
        self.schema.default_policy()
    }

    /// Whether `key` may be read on this node.
    pub fn allowed_to_read(&self, key: &str) -> bool {
        self.schema.allows_read(key)
    }

    /// Whether `key` may be written on this node.
    pub fn allowed_to_write(&self, key: &str) -> bool {
        self.schema.allows_write(key)
    }

    /// Number of occupied slots on this node.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether this node has no occupied slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read the value at a colon-delimited path.
    ///
    /// Resolution works segment by segment. On this node, the first
    /// segment's slot decides everything:
    ///
    /// - a nested store with more path remaining takes over the rest
    ///   (no gate on this node for that hop);
    /// - otherwise the gate runs, then a `Data` slot is cloned out or
    ///   descended into, a callable is invoked (and its result
    ///   descended into when segments remain), and a store slot on the
    ///   final segment comes back as a snapshot.
    ///
    /// Descent through plain data past the first segment has no
    /// further permission boundaries. A miss anywhere resolves to
    /// [`StoreResult::Absent`] rather than an error.
    ///
    /// # Errors
    ///
    /// [`Error::Path`] for unparseable paths, [`Error::Denied`] when
    /// the gate refuses the first segment.
    pub fn read(&self, path: &str) -> Result<StoreResult, Error> {
        self.read_at(&Path::parse(path)?)
    }

    /// [`read`](PathStore::read) with a pre-parsed path.
    pub fn read_at(&self, path: &Path) -> Result<StoreResult, Error> {
        let key = path.first();
        let rest = path.rest();

        // Child stores take the remaining segments ungated; their own
        // schema governs them.
        if let (Some(rest), Some(StoreValue::Store(child))) = (rest.as_ref(), self.slots.get(key))
        {
            return child.read_at(rest);
        }

        self.gate(Operation::Read, key)?;

        let Some(slot) = self.slots.get(key) else {
            return Ok(StoreResult::Absent);
        };

        match rest {
            None => Ok(match slot {
                StoreValue::Data(value) => StoreResult::Value(value.clone()),
                StoreValue::Callable(thunk) => thunk.call(),
                StoreValue::Store(store) => StoreResult::Store(store.clone()),
            }),
            Some(rest) => match slot {
                StoreValue::Data(value) => Ok(descend(value, &rest)),
                StoreValue::Callable(thunk) => match thunk.call() {
                    StoreResult::Value(value) => Ok(descend(&value, &rest)),
                    StoreResult::Store(store) => store.read_at(&rest),
                    StoreResult::Absent => Ok(StoreResult::Absent),
                },
                // non-final store slots were delegated before the gate
                StoreValue::Store(store) => store.read_at(&rest),
            },
        }
    }

    /// Write a value at a colon-delimited path, returning the written
    /// value unchanged.
    ///
    /// The same delegation rule as [`read`](PathStore::read) applies:
    /// a nested store at the first segment takes over the remaining
    /// path ungated, so an existing child store is reused, never
    /// silently replaced. Otherwise the gate runs on the first
    /// segment, and then:
    ///
    /// - a final segment replaces the slot outright, whatever it held;
    /// - more segments descend through plain data, materializing an
    ///   empty map at the slot (and at every missing intermediate
    ///   position) along the way. A `Null` on the walk is promoted to
    ///   a map.
    ///
    /// # Errors
    ///
    /// [`Error::Path`], [`Error::Denied`], plus the descent failures:
    /// [`Error::NotContainer`] when an existing scalar or callable
    /// blocks the walk (naming the key that holds the obstruction),
    /// [`Error::BadIndex`] for bad array segments,
    /// and [`Error::InvalidNesting`] when the value is a callable or
    /// store headed beneath plain data (those only live in direct
    /// slots of a store node).
    pub fn write(
        &mut self,
        path: &str,
        value: impl Into<StoreValue>,
    ) -> Result<StoreValue, Error> {
        self.write_at(&Path::parse(path)?, value)
    }

    /// [`write`](PathStore::write) with a pre-parsed path.
    pub fn write_at(
        &mut self,
        path: &Path,
        value: impl Into<StoreValue>,
    ) -> Result<StoreValue, Error> {
        self.put(path, value.into())
    }

    fn put(&mut self, path: &Path, value: StoreValue) -> Result<StoreValue, Error> {
        let key = path.first();
        let rest = path.rest();

        if let (Some(rest), Some(StoreValue::Store(child))) =
            (rest.as_ref(), self.slots.get_mut(key))
        {
            return child.put(rest, value);
        }

        self.gate(Operation::Write, key)?;

        let Some(rest) = rest else {
            // Final segment: total replacement of whatever was here.
            self.slots.insert(key.to_string(), value.clone());
            return Ok(value);
        };

        // Beneath this slot lies plain data; callables and stores have
        // no address inside it.
        let StoreValue::Data(data) = value else {
            return Err(Error::InvalidNesting {
                key: key.to_string(),
            });
        };

        match self.slots.get_mut(key) {
            Some(StoreValue::Data(tree)) => {
                // a scalar filling the whole slot is named by the slot
                // key; deeper obstructions are named by Value::set
                if !tree.is_null() && !tree.is_container() {
                    return Err(Error::NotContainer {
                        key: key.to_string(),
                    });
                }
                tree.set(&rest, data.clone())?
            }
            // callables cannot hold children; store slots were
            // delegated above
            Some(_) => {
                return Err(Error::NotContainer {
                    key: key.to_string(),
                })
            }
            None => {
                let mut tree = Value::map();
                tree.set(&rest, data.clone())?;
                self.slots.insert(key.to_string(), StoreValue::Data(tree));
            }
        }
        Ok(StoreValue::Data(data))
    }

    /// Write several path/value pairs in iteration order.
    ///
    /// Each key is itself a full path, so entries may land at any
    /// depth. Not atomic: the first failure aborts the remainder and
    /// the writes already performed stay in place.
    pub fn write_entries<I, K, V>(&mut self, entries: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StoreValue>,
    {
        for (path, value) in entries {
            self.write(path.as_ref(), value)?;
        }
        Ok(())
    }

    /// Snapshot of the governed keys of this node.
    ///
    /// A key appears when its slot is occupied, the schema explicitly
    /// declares it, and the declared set grants read. The default
    /// policy plays no part: undeclared keys stay hidden however
    /// permissive it is. Values come back as stored - callables are
    /// not invoked, nested stores are not expanded.
    pub fn entries(&self) -> BTreeMap<String, StoreValue> {
        self.slots
            .iter()
            .filter(|(key, _)| {
                self.schema
                    .permissions_for(key)
                    .is_some_and(|set| set.grants_read())
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Permission gate for one key on this node.
    fn gate(&self, op: Operation, key: &str) -> Result<(), Error> {
        let allowed = match op {
            Operation::Read => self.schema.allows_read(key),
            Operation::Write => self.schema.allows_write(key),
        };
        if allowed {
            Ok(())
        } else {
            log::debug!("{} denied for key '{}'", op, key);
            Err(Error::Denied {
                op,
                key: key.to_string(),
            })
        }
    }
}

/// Resolve remaining segments through plain data. Past the node's
/// first segment there is no schema left to consult.
fn descend(value: &Value, rest: &Path) -> StoreResult {
    match value.get(rest) {
        Some(found) => StoreResult::Value(found.clone()),
        None => StoreResult::Absent,
    }
}
