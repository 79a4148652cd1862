//! Typed host-domain contracts and shared models used by the notification worker and its
//! browser adapters.
//!
//! This crate is the API-first boundary for service-worker platform services: notifications,
//! named cache buckets, foreground clients, and the worker's own scope. Concrete browser
//! adapters live in `platform_host_web`; the no-op and in-memory adapters here back unsupported
//! targets and native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod clients;
pub mod host;
pub mod notifications;
pub mod scope;
pub mod time;

pub use cache::{CacheStorageFuture, CacheStorageService, MemoryCacheStorage, NoopCacheStorage};
pub use clients::{
    ClientWindow, ClientsCall, ClientsFuture, ClientsService, MemoryClientsService,
    NoopClientsService,
};
pub use host::{CapabilityStatus, MemoryWorkerHost, WorkerCapabilities, WorkerServices};
pub use notifications::{
    DisplayedNotification, MemoryDisplayedNotification, MemoryNotificationService,
    NoopNotificationService, NotificationAction, NotificationFuture, NotificationOptions,
    NotificationService, ShownNotification,
};
pub use scope::{
    MemoryReplyPort, MemoryWorkerScope, NoopWorkerScope, ReplyPort, WorkerScopeFuture,
    WorkerScopeService,
};
pub use time::unix_time_ms_now;
