//! Cache-domain contracts and lightweight test adapters.

mod cache_storage;

pub use cache_storage::{
    CacheStorageFuture, CacheStorageService, MemoryCacheStorage, NoopCacheStorage,
};
