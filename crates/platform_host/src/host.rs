//! Shared service-bundle and capability models for worker composition.

use std::rc::Rc;

use crate::{
    CacheStorageService, ClientsService, MemoryCacheStorage, MemoryClientsService,
    MemoryNotificationService, MemoryWorkerScope, NoopCacheStorage, NoopClientsService,
    NoopNotificationService, NoopWorkerScope, NotificationService, WorkerScopeService,
};

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not supported by the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Maps a host feature probe to a status.
    pub const fn from_supported(supported: bool) -> Self {
        if supported {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    /// Returns whether the capability can be used.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Host capability snapshot, probed once when the worker script starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerCapabilities {
    /// Periodic background sync (`periodicsync` events).
    pub periodic_sync: CapabilityStatus,
}

impl WorkerCapabilities {
    /// Posture with every optional capability available.
    pub const fn all() -> Self {
        Self {
            periodic_sync: CapabilityStatus::Available,
        }
    }

    /// Posture with no optional capability available.
    pub const fn none() -> Self {
        Self {
            periodic_sync: CapabilityStatus::Unavailable,
        }
    }
}

/// Host service bundle injected into the notification worker.
///
/// Adapters are selected before this bundle is built; handlers only see the trait objects.
#[derive(Clone)]
pub struct WorkerServices {
    /// Notification display surface.
    pub notifications: Rc<dyn NotificationService>,
    /// Named cache buckets.
    pub caches: Rc<dyn CacheStorageService>,
    /// Foreground windows.
    pub clients: Rc<dyn ClientsService>,
    /// The worker's own registration scope.
    pub scope: Rc<dyn WorkerScopeService>,
    /// Optional capability snapshot.
    pub capabilities: WorkerCapabilities,
}

impl WorkerServices {
    /// Bundle of no-op adapters with no optional capabilities.
    pub fn noop() -> Self {
        Self {
            notifications: Rc::new(NoopNotificationService),
            caches: Rc::new(NoopCacheStorage),
            clients: Rc::new(NoopClientsService),
            scope: Rc::new(NoopWorkerScope),
            capabilities: WorkerCapabilities::none(),
        }
    }
}

/// In-memory adapters kept alongside the [`WorkerServices`] bundle built from them, so tests can
/// drive the bundle and inspect each adapter afterwards.
#[derive(Clone)]
pub struct MemoryWorkerHost {
    /// Recording notification surface.
    pub notifications: MemoryNotificationService,
    /// In-memory cache buckets.
    pub caches: MemoryCacheStorage,
    /// Recording clients service.
    pub clients: MemoryClientsService,
    /// Scope with a fixed origin.
    pub scope: MemoryWorkerScope,
    /// Capability snapshot reported by the bundle.
    pub capabilities: WorkerCapabilities,
}

impl MemoryWorkerHost {
    /// Creates empty adapters running under `origin` with every capability available.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            notifications: MemoryNotificationService::default(),
            caches: MemoryCacheStorage::default(),
            clients: MemoryClientsService::default(),
            scope: MemoryWorkerScope::new(origin),
            capabilities: WorkerCapabilities::all(),
        }
    }

    /// Replaces the cache adapter.
    pub fn with_caches(mut self, caches: MemoryCacheStorage) -> Self {
        self.caches = caches;
        self
    }

    /// Replaces the clients adapter.
    pub fn with_clients(mut self, clients: MemoryClientsService) -> Self {
        self.clients = clients;
        self
    }

    /// Replaces the capability snapshot.
    pub fn with_capabilities(mut self, capabilities: WorkerCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Builds a service bundle sharing state with these adapters.
    pub fn services(&self) -> WorkerServices {
        WorkerServices {
            notifications: Rc::new(self.notifications.clone()),
            caches: Rc::new(self.caches.clone()),
            clients: Rc::new(self.clients.clone()),
            scope: Rc::new(self.scope.clone()),
            capabilities: self.capabilities,
        }
    }
}
