//! Errors raised by typed access.

use thiserror::Error;

/// Errors from typed reads and writes.
///
/// Store-level failures (denied permissions, malformed paths, write
/// obstructions) pass through unchanged; serde failures carry the
/// underlying `serde_json` error as their source.
#[derive(Debug, Error)]
pub enum Error {
    /// The store rejected the operation.
    #[error("{0}")]
    Store(#[from] keyward_core::Error),

    /// Serializing a Rust value into a data tree failed.
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Deserializing a data tree into a Rust value failed.
    #[error("deserialization failed: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The path resolved to a nested store rather than plain data.
    #[error("'{path}' holds a nested store, not data")]
    NotData { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_pass_through() {
        let inner = keyward_core::Error::Denied {
            op: keyward_core::Operation::Read,
            key: "secret".to_string(),
        };
        let err = Error::from(inner);
        assert_eq!(err.to_string(), "no read permission for key 'secret'");
    }

    #[test]
    fn not_data_names_the_path() {
        let err = Error::NotData {
            path: "wallet".to_string(),
        };
        assert_eq!(err.to_string(), "'wallet' holds a nested store, not data");
    }

    #[test]
    fn serde_errors_keep_their_source() {
        use std::error::Error as _;

        let bad: serde_json::Error =
            serde_json::from_str::<i64>("not a number").unwrap_err();
        let err = Error::Deserialize(bad);
        assert!(err.to_string().starts_with("deserialization failed:"));
        assert!(err.source().is_some());
    }
}
