//! Notification lifecycle handler for the prayer-reminder service worker.
//!
//! Each platform event (install, activate, push, notification click/close, background sync,
//! foreground message) maps to one [`WorkerEvent`] handled by [`NotificationWorker::handle`].
//! Handlers are written against the `platform_host` service contracts, so the same logic runs
//! inside the browser and under native tests with in-memory adapters.
//!
//! - [`lifecycle`]: version takeover, app-shell precache, stale cache pruning, client claim.
//! - [`presenter`]: default-filled notification display for pushes and page requests.
//! - [`click_router`]: close, then focus/navigate a same-origin window or open a new one.
//! - [`background`]: guarded reminder check for `sync`/`periodicsync`.
//! - [`message`]: typed control messages from foreground pages.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod background;
pub mod click_router;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod message;
pub mod presenter;
pub mod request;
pub mod worker;

pub use background::{BackgroundOutcome, BackgroundTrigger};
pub use click_router::{is_same_origin, ClickOutcome, ClickRouter};
pub use config::{NotificationDefaults, WorkerConfig, DEFAULT_CACHE_VERSION};
pub use error::WorkerError;
pub use lifecycle::LifecycleManager;
pub use message::{Acknowledgement, ControlMessage};
pub use presenter::NotificationPresenter;
pub use request::{NotificationData, NotificationRequest, NotificationRequestPatch};
pub use worker::{NotificationWorker, WorkerEvent, WorkerEventKind};
