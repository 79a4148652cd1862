//! Cache API-backed cache storage implementation.

use platform_host::{CacheStorageFuture, CacheStorageService};

#[derive(Debug, Clone, Copy, Default)]
/// Worker cache storage backed by the global `caches` object.
pub struct WebCacheStorage;

impl CacheStorageService for WebCacheStorage {
    fn add_all<'a>(
        &'a self,
        cache_name: &'a str,
        urls: &'a [String],
    ) -> CacheStorageFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::cache_add_all(cache_name, urls).await })
    }

    fn cache_names<'a>(&'a self) -> CacheStorageFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async move { crate::bridge::cache_names().await })
    }

    fn delete_cache<'a>(
        &'a self,
        cache_name: &'a str,
    ) -> CacheStorageFuture<'a, Result<bool, String>> {
        Box::pin(async move { crate::bridge::cache_delete(cache_name).await })
    }
}
