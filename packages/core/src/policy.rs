//! Permission tags, per-key tag sets, and the per-node declaration table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single permission tag.
///
/// The serde representation uses the kebab-case tag names `read`,
/// `write`, `read-write`, and `none`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    /// Grants reading only.
    Read,
    /// Grants writing only.
    Write,
    /// Grants both operations.
    ReadWrite,
    /// Grants nothing. A declaration of just this tag means
    /// "explicitly no access" instead of falling back to the node's
    /// default policy.
    None,
}

impl Permission {
    /// Whether this tag grants reading.
    pub fn grants_read(self) -> bool {
        matches!(self, Permission::Read | Permission::ReadWrite)
    }

    /// Whether this tag grants writing.
    pub fn grants_write(self) -> bool {
        matches!(self, Permission::Write | Permission::ReadWrite)
    }
}

/// The tags declared for one key.
///
/// Grants are purely positive: the set allows an operation when any
/// member tag grants it, so `[none, read]` still reads. An empty set
/// denies everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(Vec<Permission>);

impl PermissionSet {
    /// Whether any member tag grants reading.
    pub fn grants_read(&self) -> bool {
        self.0.iter().any(|p| p.grants_read())
    }

    /// Whether any member tag grants writing.
    pub fn grants_write(&self) -> bool {
        self.0.iter().any(|p| p.grants_write())
    }

    /// The member tags in declaration order.
    pub fn tags(&self) -> &[Permission] {
        &self.0
    }
}

impl From<Permission> for PermissionSet {
    fn from(tag: Permission) -> Self {
        PermissionSet(vec![tag])
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionSet {
    fn from(tags: [Permission; N]) -> Self {
        PermissionSet(tags.to_vec())
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        PermissionSet(iter.into_iter().collect())
    }
}

/// Permission lookup consumed by a store node when gating operations.
///
/// The provided methods implement the fallback once: a key with an
/// explicit declaration is governed by that set alone, an undeclared
/// key by the default policy.
pub trait PermissionLookup {
    /// The tag set declared for `key`, if any.
    fn permissions_for(&self, key: &str) -> Option<&PermissionSet>;

    /// The policy applied to keys without a declaration.
    fn default_policy(&self) -> Permission;

    /// Whether `key` may be read on this node.
    fn allows_read(&self, key: &str) -> bool {
        match self.permissions_for(key) {
            Some(set) => set.grants_read(),
            None => self.default_policy().grants_read(),
        }
    }

    /// Whether `key` may be written on this node.
    fn allows_write(&self, key: &str) -> bool {
        match self.permissions_for(key) {
            Some(set) => set.grants_write(),
            None => self.default_policy().grants_write(),
        }
    }
}

/// The declaration table attached to one store node.
///
/// Built once at construction and immutable afterwards, either with
/// chained [`Schema::declare`] calls or deserialized from a
/// configuration table:
///
/// ```rust
/// use keyward_core::{PermissionLookup, Schema};
///
/// let schema: Schema = serde_json::from_value(serde_json::json!({
///     "default_policy": "read-write",
///     "declared": { "secret": ["none"], "name": ["read"] },
/// }))
/// .unwrap();
///
/// assert!(!schema.allows_read("secret"));
/// assert!(schema.allows_read("name"));
/// assert!(!schema.allows_write("name"));
/// assert!(schema.allows_write("anything-else"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    default_policy: Permission,
    #[serde(default)]
    declared: BTreeMap<String, PermissionSet>,
}

impl Schema {
    /// New schema with the given default policy and no declarations.
    pub fn new(default_policy: Permission) -> Self {
        Schema {
            default_policy,
            declared: BTreeMap::new(),
        }
    }

    /// Declare the tag set governing `key`.
    ///
    /// A later declaration for the same key replaces the earlier one;
    /// once the schema is attached to a node nothing can change it.
    #[must_use]
    pub fn declare(
        mut self,
        key: impl Into<String>,
        permissions: impl Into<PermissionSet>,
    ) -> Self {
        self.declared.insert(key.into(), permissions.into());
        self
    }
}

impl Default for Schema {
    /// A permissive schema: every key readable and writable.
    fn default() -> Self {
        Schema::new(Permission::ReadWrite)
    }
}

impl PermissionLookup for Schema {
    fn permissions_for(&self, key: &str) -> Option<&PermissionSet> {
        self.declared.get(key)
    }

    fn default_policy(&self) -> Permission {
        self.default_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_grants() {
        assert!(Permission::Read.grants_read());
        assert!(!Permission::Read.grants_write());
        assert!(Permission::Write.grants_write());
        assert!(!Permission::Write.grants_read());
        assert!(Permission::ReadWrite.grants_read());
        assert!(Permission::ReadWrite.grants_write());
        assert!(!Permission::None.grants_read());
        assert!(!Permission::None.grants_write());
    }

    #[test]
    fn set_grants_when_any_tag_grants() {
        let set = PermissionSet::from([Permission::None, Permission::Read]);
        assert!(set.grants_read());
        assert!(!set.grants_write());

        let set = PermissionSet::from([Permission::Read, Permission::Write]);
        assert!(set.grants_read());
        assert!(set.grants_write());
    }

    #[test]
    fn empty_set_denies_everything() {
        let set = PermissionSet::default();
        assert!(!set.grants_read());
        assert!(!set.grants_write());
    }

    #[test]
    fn undeclared_keys_fall_back_to_default() {
        let schema = Schema::new(Permission::Read);
        assert!(schema.allows_read("anything"));
        assert!(!schema.allows_write("anything"));

        let schema = Schema::new(Permission::None);
        assert!(!schema.allows_read("anything"));
        assert!(!schema.allows_write("anything"));
    }

    #[test]
    fn declared_keys_override_default_both_ways() {
        // Restrictive default, permissive declaration
        let schema = Schema::new(Permission::None).declare("open", Permission::ReadWrite);
        assert!(schema.allows_read("open"));
        assert!(schema.allows_write("open"));
        assert!(!schema.allows_read("other"));

        // Permissive default, restrictive declaration
        let schema = Schema::new(Permission::ReadWrite).declare("locked", Permission::None);
        assert!(!schema.allows_read("locked"));
        assert!(!schema.allows_write("locked"));
        assert!(schema.allows_read("other"));
    }

    #[test]
    fn later_declaration_replaces_earlier() {
        let schema = Schema::new(Permission::None)
            .declare("k", Permission::Read)
            .declare("k", Permission::Write);
        assert!(!schema.allows_read("k"));
        assert!(schema.allows_write("k"));
    }

    #[test]
    fn default_schema_is_permissive() {
        let schema = Schema::default();
        assert_eq!(schema.default_policy(), Permission::ReadWrite);
        assert!(schema.allows_read("k"));
        assert!(schema.allows_write("k"));
    }

    #[test]
    fn permissions_for_reports_declarations_only() {
        let schema = Schema::default().declare("k", Permission::Read);
        assert!(schema.permissions_for("k").is_some());
        assert!(schema.permissions_for("other").is_none());
    }

    #[test]
    fn permission_serde_uses_kebab_tags() {
        assert_eq!(
            serde_json::to_value(Permission::ReadWrite).unwrap(),
            serde_json::json!("read-write")
        );
        assert_eq!(
            serde_json::from_value::<Permission>(serde_json::json!("none")).unwrap(),
            Permission::None
        );
    }

    #[test]
    fn permission_set_serde_is_transparent() {
        let set = PermissionSet::from([Permission::Read, Permission::None]);
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            serde_json::json!(["read", "none"])
        );
    }

    #[test]
    fn schema_from_config_table() {
        let schema: Schema = serde_json::from_value(serde_json::json!({
            "default_policy": "write",
            "declared": { "name": ["read"] },
        }))
        .unwrap();

        assert_eq!(schema.default_policy(), Permission::Write);
        assert!(schema.allows_read("name"));
        assert!(!schema.allows_write("name"));
        assert!(schema.allows_write("other"));
        assert!(!schema.allows_read("other"));
    }

    #[test]
    fn schema_config_declared_is_optional() {
        let schema: Schema =
            serde_json::from_value(serde_json::json!({ "default_policy": "read" })).unwrap();
        assert!(schema.allows_read("k"));
        assert!(!schema.allows_write("k"));
    }

    #[test]
    fn schema_serde_roundtrip() {
        let schema = Schema::new(Permission::Read).declare("k", [Permission::Write]);
        let json = serde_json::to_value(&schema).unwrap();
        let back: Schema = serde_json::from_value(json).unwrap();
        assert_eq!(back, schema);
    }
}
