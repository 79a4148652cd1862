//! Named cache-bucket service contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`CacheStorageService`] async methods.
pub type CacheStorageFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service over the worker's named cache buckets.
pub trait CacheStorageService {
    /// Fetches every URL in `urls` and stores the responses in the bucket named `cache_name`.
    ///
    /// The bucket is created when missing. The operation is all-or-nothing.
    fn add_all<'a>(
        &'a self,
        cache_name: &'a str,
        urls: &'a [String],
    ) -> CacheStorageFuture<'a, Result<(), String>>;

    /// Lists the names of all existing buckets in host order.
    fn cache_names<'a>(&'a self) -> CacheStorageFuture<'a, Result<Vec<String>, String>>;

    /// Deletes the bucket named `cache_name`, returning whether a bucket was removed.
    fn delete_cache<'a>(
        &'a self,
        cache_name: &'a str,
    ) -> CacheStorageFuture<'a, Result<bool, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op cache storage for unsupported targets and baseline tests.
pub struct NoopCacheStorage;

impl CacheStorageService for NoopCacheStorage {
    fn add_all<'a>(
        &'a self,
        _cache_name: &'a str,
        _urls: &'a [String],
    ) -> CacheStorageFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn cache_names<'a>(&'a self) -> CacheStorageFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn delete_cache<'a>(
        &'a self,
        _cache_name: &'a str,
    ) -> CacheStorageFuture<'a, Result<bool, String>> {
        Box::pin(async { Ok(false) })
    }
}

#[derive(Debug, Default)]
struct MemoryCacheState {
    buckets: Vec<(String, Vec<String>)>,
    deleted: Vec<String>,
    add_all_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory cache storage that keeps bucket insertion order and records deletions.
pub struct MemoryCacheStorage {
    inner: Rc<RefCell<MemoryCacheState>>,
}

impl MemoryCacheStorage {
    /// Creates storage pre-populated with empty buckets named `names`.
    pub fn with_buckets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let storage = Self::default();
        storage.inner.borrow_mut().buckets = names
            .into_iter()
            .map(|name| (name.into(), Vec::new()))
            .collect();
        storage
    }

    /// Makes every subsequent [`CacheStorageService::add_all`] call fail with `message`.
    pub fn fail_add_all(self, message: impl Into<String>) -> Self {
        self.inner.borrow_mut().add_all_error = Some(message.into());
        self
    }

    /// Returns the URLs stored in `cache_name`, or `None` when the bucket does not exist.
    pub fn cached_urls(&self, cache_name: &str) -> Option<Vec<String>> {
        self.inner
            .borrow()
            .buckets
            .iter()
            .find(|(name, _)| name == cache_name)
            .map(|(_, urls)| urls.clone())
    }

    /// Returns bucket names removed through [`CacheStorageService::delete_cache`], in call order.
    pub fn deleted(&self) -> Vec<String> {
        self.inner.borrow().deleted.clone()
    }
}

impl CacheStorageService for MemoryCacheStorage {
    fn add_all<'a>(
        &'a self,
        cache_name: &'a str,
        urls: &'a [String],
    ) -> CacheStorageFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            if let Some(message) = &state.add_all_error {
                return Err(message.clone());
            }
            match state.buckets.iter_mut().find(|(name, _)| name == cache_name) {
                Some((_, stored)) => {
                    for url in urls {
                        if !stored.contains(url) {
                            stored.push(url.clone());
                        }
                    }
                }
                None => state.buckets.push((cache_name.to_string(), urls.to_vec())),
            }
            Ok(())
        })
    }

    fn cache_names<'a>(&'a self) -> CacheStorageFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async move {
            Ok(self
                .inner
                .borrow()
                .buckets
                .iter()
                .map(|(name, _)| name.clone())
                .collect())
        })
    }

    fn delete_cache<'a>(
        &'a self,
        cache_name: &'a str,
    ) -> CacheStorageFuture<'a, Result<bool, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            let before = state.buckets.len();
            state.buckets.retain(|(name, _)| name != cache_name);
            let removed = state.buckets.len() != before;
            if removed {
                state.deleted.push(cache_name.to_string());
            }
            Ok(removed)
        })
    }
}
