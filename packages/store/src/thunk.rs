//! Zero-argument deferred computations stored under a key.

use std::sync::Arc;

use crate::StoreResult;

/// A callable slot value: a zero-argument closure producing a
/// [`StoreResult`].
///
/// Reads never hand a `Thunk` back to the caller; resolution invokes it
/// and works with what it returns. Invocation happens on every read,
/// with no caching, so a thunk backed by changing state stays live.
///
/// `Clone` shares the underlying closure.
///
/// # Example
///
/// ```rust
/// use keyward::{StoreResult, Thunk, Value};
///
/// let thunk = Thunk::new(|| StoreResult::Value(Value::from(7)));
/// assert_eq!(thunk.call().into_value(), Some(Value::from(7)));
/// ```
#[derive(Clone)]
pub struct Thunk(Arc<dyn Fn() -> StoreResult + Send + Sync>);

impl Thunk {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> StoreResult + Send + Sync + 'static,
    {
        Thunk(Arc::new(f))
    }

    /// Invoke the closure.
    pub fn call(&self) -> StoreResult {
        (self.0)()
    }
}

impl std::fmt::Debug for Thunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thunk").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn call_invokes_closure() {
        let thunk = Thunk::new(|| StoreResult::Value(Value::from("hi")));
        assert_eq!(thunk.call().into_value(), Some(Value::from("hi")));
    }

    #[test]
    fn call_invokes_every_time() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let count = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&count);
        let thunk = Thunk::new(move || {
            let n = counted.fetch_add(1, Ordering::SeqCst) + 1;
            StoreResult::Value(Value::from(n as i64))
        });

        assert_eq!(thunk.call().into_value(), Some(Value::from(1)));
        assert_eq!(thunk.call().into_value(), Some(Value::from(2)));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clone_shares_closure() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let count = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&count);
        let thunk = Thunk::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
            StoreResult::Absent
        });

        let cloned = thunk.clone();
        thunk.call();
        cloned.call();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_is_opaque() {
        let thunk = Thunk::new(|| StoreResult::Absent);
        assert!(format!("{:?}", thunk).starts_with("Thunk"));
    }
}
