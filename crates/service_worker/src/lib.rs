//! wasm entry point of the prayer-reminder service worker.
//!
//! `sw.js` registers the platform listeners and forwards each event to the exported
//! `handleEvent` (wasm only), which converts it into a typed `WorkerEvent` for the
//! notification worker.

mod manifest;

#[cfg(target_arch = "wasm32")]
mod events;

pub use manifest::{
    web_app_manifest, worker_config, CACHE_VERSION, PRECACHE_URLS, WEB_APP_MANIFEST_JSON,
};

#[cfg(test)]
mod tests {
    use notification_worker::NotificationWorker;
    use platform_host::{MemoryWorkerHost, WorkerCapabilities};

    const LOADER: &str = include_str!("../sw.js");

    #[test]
    fn loader_registers_every_unconditional_listener() {
        let host = MemoryWorkerHost::new("https://prayer.example")
            .with_capabilities(WorkerCapabilities::none());
        let worker = NotificationWorker::new(host.services(), crate::worker_config());
        for kind in worker.listened_events() {
            assert!(
                LOADER.contains(&format!("'{}'", kind.name())),
                "sw.js does not register `{}`",
                kind.name()
            );
        }
    }

    #[test]
    fn loader_gates_periodic_sync_on_support() {
        assert!(LOADER.contains("'periodicSync' in self.registration"));
        assert!(LOADER.contains("'periodicsync', forward"));
    }
}
