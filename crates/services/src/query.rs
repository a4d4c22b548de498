//! Keyed cache of the last successful result of each query.

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Cow<'static, str>);

impl QueryKey {
    pub const ME: QueryKey = QueryKey(Cow::Borrowed("get-me"));
    pub const LESSONS: QueryKey = QueryKey(Cow::Borrowed("get-lessons"));

    #[must_use]
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type Entry = Arc<dyn Any + Send + Sync>;

/// Shared between every view; clones point at the same entries.
///
/// A failed fetch leaves the previous entry in place.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached value for `key`, if one of type `T` is present.
    #[must_use]
    pub fn get<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.lock()
            .get(key)
            .and_then(|entry| entry.downcast_ref::<T>())
            .cloned()
    }

    /// Cached value or `T::default()`, for guarded rendering before the first fetch.
    #[must_use]
    pub fn get_or_default<T: Clone + Default + 'static>(&self, key: &QueryKey) -> T {
        self.get(key).unwrap_or_default()
    }

    pub fn insert<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        self.lock().insert(key, Arc::new(value));
    }

    pub fn invalidate(&self, key: &QueryKey) {
        if self.lock().remove(key).is_some() {
            debug!(%key, "query invalidated");
        }
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    #[must_use]
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.lock().contains_key(key)
    }

    /// Run `fetch` once and store its value under `key` on success.
    ///
    /// # Errors
    ///
    /// Propagates the error of `fetch`; the cached entry is left untouched.
    pub async fn fetch<T, E, Fut>(&self, key: QueryKey, fetch: Fut) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>>,
    {
        let value = fetch.await?;
        debug!(%key, "query updated");
        self.insert(key, value.clone());
        Ok(value)
    }
}
