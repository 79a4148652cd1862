use std::rc::Rc;

use platform_host::{
    CapabilityStatus, NoopCacheStorage, NoopClientsService, NoopNotificationService,
    NoopWorkerScope, WorkerCapabilities, WorkerServices,
};

use crate::{WebCacheStorage, WebClientsService, WebNotificationService, WebWorkerScope};

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Service-worker global scope adapters.
    Browser,
    /// No-op adapters for builds that must link without a worker scope.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "worker-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "worker-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Probes optional worker capabilities once.
pub fn worker_capabilities() -> WorkerCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => WorkerCapabilities {
            periodic_sync: CapabilityStatus::from_supported(
                crate::bridge::periodic_sync_supported(),
            ),
        },
        HostStrategy::Stub => WorkerCapabilities::none(),
    }
}

/// Builds the worker service bundle for the compile-time selected host strategy.
///
/// # Errors
///
/// Returns an error when the browser strategy is selected outside a service-worker scope.
pub fn build_worker_services() -> Result<WorkerServices, String> {
    match selected_host_strategy() {
        HostStrategy::Browser => Ok(WorkerServices {
            notifications: Rc::new(WebNotificationService),
            caches: Rc::new(WebCacheStorage),
            clients: Rc::new(WebClientsService),
            scope: Rc::new(WebWorkerScope::detect()?),
            capabilities: worker_capabilities(),
        }),
        HostStrategy::Stub => Ok(WorkerServices {
            notifications: Rc::new(NoopNotificationService),
            caches: Rc::new(NoopCacheStorage),
            clients: Rc::new(NoopClientsService),
            scope: Rc::new(NoopWorkerScope),
            capabilities: worker_capabilities(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_probe_reports_no_optional_capabilities() {
        assert_eq!(worker_capabilities(), WorkerCapabilities::none());
    }

    #[cfg(not(feature = "worker-host-stub"))]
    #[test]
    fn browser_strategy_requires_worker_scope() {
        assert_eq!(host_strategy_name(), "browser");
        assert!(build_worker_services().is_err());
    }

    #[cfg(feature = "worker-host-stub")]
    #[test]
    fn stub_strategy_builds_noop_bundle() {
        assert_eq!(host_strategy_name(), "stub");
        let services = build_worker_services().expect("stub services");
        assert_eq!(services.scope.origin(), "");
    }
}
