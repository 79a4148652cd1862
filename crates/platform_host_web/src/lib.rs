//! Browser (`wasm32`) implementations of [`platform_host`] service contracts for a service
//! worker.
//!
//! This crate is the concrete worker-side host wiring layer for notifications, cache storage,
//! foreground clients, and the worker scope. Platform calls go through `bridge`, which holds
//! the `inline_js` bindings for wasm and a non-wasm fallback shim.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the worker service-bundle factory.
pub mod adapters;
mod bridge;
pub mod cache;
pub mod clients;
pub mod notifications;
pub mod scope;

pub use adapters::{
    build_worker_services, host_strategy_name, selected_host_strategy, worker_capabilities,
    HostStrategy,
};
#[cfg(target_arch = "wasm32")]
pub use bridge::js_error_to_string;
pub use cache::cache_api::WebCacheStorage;
pub use clients::WebClientsService;
#[cfg(target_arch = "wasm32")]
pub use notifications::WebDisplayedNotification;
pub use notifications::WebNotificationService;
#[cfg(target_arch = "wasm32")]
pub use scope::WebReplyPort;
pub use scope::WebWorkerScope;
