//! Error types shared across the workspace.

use std::fmt;

use crate::PathError;

/// The store operation being attempted when a check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Read => write!(f, "read"),
            Operation::Write => write!(f, "write"),
        }
    }
}

/// Errors returned by store operations.
///
/// All failures are synchronous and final; there is no retry machinery.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The path string failed to parse.
    #[error("{0}")]
    Path(#[from] PathError),

    /// The key's effective permission excludes the attempted operation.
    #[error("no {op} permission for key '{key}'")]
    Denied { op: Operation, key: String },

    /// A write descended into a slot whose existing value cannot hold
    /// children.
    #[error("cannot write through '{key}': existing value is not a container")]
    NotContainer { key: String },

    /// An array segment was non-numeric or out of bounds during a
    /// plain-data write.
    #[error("invalid array index '{segment}': {message}")]
    BadIndex { segment: String, message: String },

    /// A callable or nested store was written beneath plain data. Those
    /// value kinds may only occupy a direct key of a store node.
    #[error("cannot place a callable or nested store inside plain data under '{key}'")]
    InvalidNesting { key: String },
}
